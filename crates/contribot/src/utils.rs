use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::Context;
use contribot_ghapi_interface::types::GhIssuesEvent;

use crate::Result;

/// Read and parse the issues event payload written by the workflow runner.
pub(crate) fn read_event_payload(path: impl AsRef<Path>) -> Result<GhIssuesEvent> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read event payload at '{}'", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Malformed event payload at '{}'", path.display()))
}

/// Append a `name=value` step output to the workflow outputs file.
pub(crate) fn write_action_output(
    path: impl AsRef<Path>,
    name: &str,
    value: impl std::fmt::Display,
) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Could not open step outputs at '{}'", path.display()))?;

    writeln!(file, "{}={}", name, value)
        .with_context(|| format!("Could not write step outputs at '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use contribot_ghapi_interface::types::GhIssuesAction;

    use super::*;

    #[test]
    fn read_valid_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"action": "unassigned", "issue": {{"number": 42, "assignees": []}}}}"#
        )
        .unwrap();

        let event = read_event_payload(file.path()).unwrap();
        assert_eq!(event.action, GhIssuesAction::Unassigned);
        assert_eq!(event.issue.number, 42);
    }

    #[test]
    fn read_missing_or_malformed_payload() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_event_payload(dir.path().join("missing.json")).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"action": "assigned"}}"#).unwrap();
        let err = read_event_payload(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Malformed event payload"));
    }

    #[test]
    fn append_action_outputs() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_action_output(file.path(), "is_contributor", true).unwrap();
        write_action_output(file.path(), "is_close_contributor", false).unwrap();

        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            "is_contributor=true\nis_close_contributor=false\n"
        );
    }
}

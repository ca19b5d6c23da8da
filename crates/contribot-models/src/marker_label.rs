use std::fmt::Display;

/// Label present on an issue while at least one of its assignees is external.
pub const MARKER_LABEL: &str = "community-contribution-in-progress";

/// What happened to the marker label after processing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerLabelUpdate {
    /// Label was added.
    Added,
    /// Label was removed.
    Removed,
    /// Label removal was requested but the label was not on the issue.
    NotPresent,
    /// Nothing to do for this event.
    Unchanged,
}

impl Display for MarkerLabelUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added => write!(f, "label '{MARKER_LABEL}' added"),
            Self::Removed => write!(f, "label '{MARKER_LABEL}' removed"),
            Self::NotPresent => write!(f, "label '{MARKER_LABEL}' not found"),
            Self::Unchanged => f.write_str("no label change"),
        }
    }
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// GitHub Issues event action.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Default, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GhIssuesAction {
    /// Assigned.
    Assigned,
    /// Unassigned.
    Unassigned,
    /// Any other action (opened, labeled, ...).
    #[default]
    #[serde(other)]
    Other,
}

impl Display for GhIssuesAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).map_err(|_| std::fmt::Error)?)
    }
}

use serde::{Deserialize, Serialize};

use super::{GhIssue, GhIssuesAction};

/// GitHub Issues event, as found in the workflow event payload.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Eq, PartialEq)]
pub struct GhIssuesEvent {
    /// Action.
    pub action: GhIssuesAction,
    /// Issue.
    pub issue: GhIssue,
}

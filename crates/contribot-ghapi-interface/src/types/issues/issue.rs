use serde::{Deserialize, Serialize};

use crate::types::common::GhUser;

/// GitHub Issue.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct GhIssue {
    /// Number.
    pub number: u64,
    /// Web URL.
    #[serde(default)]
    pub html_url: String,
    /// Primary assignee.
    #[serde(default)]
    pub assignee: Option<GhUser>,
    /// Assignees.
    #[serde(default)]
    pub assignees: Vec<GhUser>,
}

impl GhIssue {
    /// Logins of every assignee.
    pub fn assignee_logins(&self) -> Vec<String> {
        self.assignees.iter().map(|a| a.login.clone()).collect()
    }
}

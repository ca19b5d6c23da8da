use async_trait::async_trait;

use crate::{
    types::{GhIssue, GhUser},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Check if a user is a collaborator of a repository.
    ///
    /// Answers `false` only when GitHub confirms the user is not a collaborator.
    async fn repository_collaborator_check(
        &self,
        owner: &str,
        name: &str,
        username: &str,
    ) -> Result<bool>;
    /// Add labels for a target issue.
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()>;
    /// Remove one label from a target issue.
    ///
    /// Fails with [`crate::ApiError::NotFound`] when the label is not on the issue.
    async fn issue_label_remove(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        label: &str,
    ) -> Result<()>;
    /// List all members of an organization.
    async fn org_members_list(&self, org: &str) -> Result<Vec<GhUser>>;
    /// List all open issues of a repository.
    async fn issues_list_open(&self, owner: &str, name: &str) -> Result<Vec<GhIssue>>;
}

//! Null driver for GH API.
//!
//! Every call is logged and answered without touching the network, which
//! makes it usable for dry runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use contribot_ghapi_interface::{
    types::{GhIssue, GhUser},
    ApiService, Result,
};

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn repository_collaborator_check(
        &self,
        owner: &str,
        name: &str,
        username: &str,
    ) -> Result<bool> {
        Ok(true)
    }

    #[tracing::instrument(skip(self))]
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn issue_label_remove(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        label: &str,
    ) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn org_members_list(&self, org: &str) -> Result<Vec<GhUser>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn issues_list_open(&self, owner: &str, name: &str) -> Result<Vec<GhIssue>> {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn everyone_is_a_collaborator() {
        let service = NullApiService::new();

        assert!(service
            .repository_collaborator_check("le", "kolibri", "anyone")
            .await
            .unwrap());
        assert!(service.org_members_list("le").await.unwrap().is_empty());
        service
            .issue_label_remove("le", "kolibri", 1, "label")
            .await
            .unwrap();
    }
}

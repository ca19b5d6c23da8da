use async_trait::async_trait;
use contribot_ghapi_interface::ApiError;
use contribot_models::{IssueHandle, MARKER_LABEL};
use shaku::{Component, Interface};
use tracing::{error, info};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RemoveMarkerLabelInterface: Interface {
    /// Remove the marker label, returning `false` if it was not on the issue.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, issue: &IssueHandle) -> Result<bool>;
}

#[derive(Component)]
#[shaku(interface = RemoveMarkerLabelInterface)]
pub(crate) struct RemoveMarkerLabel;

#[async_trait]
impl RemoveMarkerLabelInterface for RemoveMarkerLabel {
    #[tracing::instrument(skip(self, ctx), fields(issue = %issue), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, issue: &IssueHandle) -> Result<bool> {
        match ctx
            .api_service
            .issue_label_remove(issue.owner(), issue.name(), issue.number(), MARKER_LABEL)
            .await
        {
            Ok(()) => {
                info!(issue = %issue, label = MARKER_LABEL, "Label removed");
                Ok(true)
            }
            Err(ApiError::NotFound { .. }) => {
                info!(issue = %issue, label = MARKER_LABEL, "Label not found");
                Ok(false)
            }
            Err(e) => {
                error!(issue = %issue, error = %e, "Error removing label");
                Err(e.into())
            }
        }
    }
}

use async_trait::async_trait;
use contribot_models::{IssueHandle, MARKER_LABEL};
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait AddMarkerLabelInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, issue: &IssueHandle) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = AddMarkerLabelInterface)]
pub(crate) struct AddMarkerLabel;

#[async_trait]
impl AddMarkerLabelInterface for AddMarkerLabel {
    #[tracing::instrument(skip(self, ctx), fields(issue = %issue))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, issue: &IssueHandle) -> Result<()> {
        ctx.api_service
            .issue_labels_add(
                issue.owner(),
                issue.name(),
                issue.number(),
                &[MARKER_LABEL.to_string()],
            )
            .await?;

        info!(issue = %issue, label = MARKER_LABEL, "Label added");
        Ok(())
    }
}

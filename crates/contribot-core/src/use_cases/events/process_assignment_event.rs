use async_trait::async_trait;
use contribot_ghapi_interface::types::{GhIssuesAction, GhIssuesEvent};
use contribot_models::{IssueHandle, MarkerLabelUpdate, RepositoryPath};
use shaku::{Component, HasComponent, Interface};
use tracing::debug;

use crate::{
    use_cases::{
        assignees::DetectExternalAssigneeInterface,
        labels::{AddMarkerLabelInterface, RemoveMarkerLabelInterface},
    },
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessAssignmentEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        event: &GhIssuesEvent,
    ) -> Result<MarkerLabelUpdate>;
}

/// Keep the marker label in line with the issue assignees.
///
/// The label is only added on `assigned` and only removed on `unassigned`; an
/// `assigned` event with internal assignees only leaves an existing label alone.
#[derive(Component)]
#[shaku(interface = ProcessAssignmentEventInterface)]
pub(crate) struct ProcessAssignmentEvent;

#[async_trait]
impl ProcessAssignmentEventInterface for ProcessAssignmentEvent {
    #[tracing::instrument(
        skip(self, ctx, event),
        fields(action = %event.action, number = event.issue.number),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        event: &GhIssuesEvent,
    ) -> Result<MarkerLabelUpdate> {
        if event.action == GhIssuesAction::Other {
            debug!(action = %event.action, "Ignoring non-assignment action");
            return Ok(MarkerLabelUpdate::Unchanged);
        }

        let issue = IssueHandle::new(repository_path.clone(), event.issue.number);
        let detect_external_assignee: &dyn DetectExternalAssigneeInterface =
            ctx.core_module.resolve_ref();
        let has_external_assignee = detect_external_assignee
            .run(ctx, repository_path, &event.issue.assignee_logins())
            .await;

        match (event.action, has_external_assignee) {
            (GhIssuesAction::Assigned, true) => {
                let add_marker_label: &dyn AddMarkerLabelInterface = ctx.core_module.resolve_ref();
                add_marker_label.run(ctx, &issue).await?;
                Ok(MarkerLabelUpdate::Added)
            }
            (GhIssuesAction::Unassigned, false) => {
                let remove_marker_label: &dyn RemoveMarkerLabelInterface =
                    ctx.core_module.resolve_ref();
                if remove_marker_label.run(ctx, &issue).await? {
                    Ok(MarkerLabelUpdate::Removed)
                } else {
                    Ok(MarkerLabelUpdate::NotPresent)
                }
            }
            _ => Ok(MarkerLabelUpdate::Unchanged),
        }
    }
}

use async_trait::async_trait;
use contribot_models::RepositoryPath;
use shaku::{Component, HasComponent, Interface};

use super::ClassifyAssigneeInterface;
use crate::CoreContext;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DetectExternalAssigneeInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        assignees: &[String],
    ) -> bool;
}

#[derive(Component)]
#[shaku(interface = DetectExternalAssigneeInterface)]
pub(crate) struct DetectExternalAssignee;

#[async_trait]
impl DetectExternalAssigneeInterface for DetectExternalAssignee {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        assignees: &[String],
    ) -> bool {
        let classify_assignee: &dyn ClassifyAssigneeInterface = ctx.core_module.resolve_ref();

        for assignee in assignees {
            if classify_assignee
                .run(ctx, repository_path, assignee)
                .await
                .is_external()
            {
                return true;
            }
        }

        false
    }
}

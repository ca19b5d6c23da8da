use async_trait::async_trait;
use contribot_models::{AssigneeKind, RepositoryPath};
use shaku::{Component, Interface};
use tracing::warn;

use crate::CoreContext;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ClassifyAssigneeInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        username: &str,
    ) -> AssigneeKind;
}

#[derive(Component)]
#[shaku(interface = ClassifyAssigneeInterface)]
pub(crate) struct ClassifyAssignee;

#[async_trait]
impl ClassifyAssigneeInterface for ClassifyAssignee {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        username: &str,
    ) -> AssigneeKind {
        if username.is_empty() {
            return AssigneeKind::Unknown;
        }

        // A failed lookup must not abort the run: the assignee is then not counted as external.
        match ctx
            .api_service
            .repository_collaborator_check(repository_path.owner(), repository_path.name(), username)
            .await
        {
            Ok(true) => AssigneeKind::Internal,
            Ok(false) => AssigneeKind::External,
            Err(e) => {
                warn!(
                    repository_path = %repository_path,
                    username,
                    error = %e,
                    "Error checking user type"
                );
                AssigneeKind::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use contribot_ghapi_interface::ApiError;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn collaborator_is_internal() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_repository_collaborator_check()
            .once()
            .withf(|owner, name, username| {
                owner == "le" && name == "kolibri" && username == "teamUser"
            })
            .return_once(|_, _, _| Ok(true));

        assert_eq!(
            ClassifyAssignee
                .run(&ctx.as_context(), &("le", "kolibri").into(), "teamUser")
                .await,
            AssigneeKind::Internal
        );
    }

    #[tokio::test]
    async fn non_collaborator_is_external() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_repository_collaborator_check()
            .once()
            .return_once(|_, _, _| Ok(false));

        assert_eq!(
            ClassifyAssignee
                .run(&ctx.as_context(), &("le", "kolibri").into(), "extUser")
                .await,
            AssigneeKind::External
        );
    }

    #[tokio::test]
    async fn lookup_failure_is_unknown() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_repository_collaborator_check()
            .once()
            .return_once(|_, _, _| {
                Err(ApiError::UnexpectedStatus {
                    status: 502,
                    url: "https://api.github.com/repos/le/kolibri/collaborators/someone".into(),
                })
            });

        assert_eq!(
            ClassifyAssignee
                .run(&ctx.as_context(), &("le", "kolibri").into(), "someone")
                .await,
            AssigneeKind::Unknown
        );
    }

    #[tokio::test]
    async fn empty_username_is_unknown_without_lookup() {
        let ctx = CoreContextTest::new();

        assert_eq!(
            ClassifyAssignee
                .run(&ctx.as_context(), &("le", "kolibri").into(), "")
                .await,
            AssigneeKind::Unknown
        );
    }
}

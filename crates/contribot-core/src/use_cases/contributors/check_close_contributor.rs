use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::CoreContext;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CheckCloseContributorInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, username: &str) -> bool;
}

/// Look the user up in the configured close contributors, ignoring case.
#[derive(Component)]
#[shaku(interface = CheckCloseContributorInterface)]
pub(crate) struct CheckCloseContributor;

#[async_trait]
impl CheckCloseContributorInterface for CheckCloseContributor {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, username: &str) -> bool {
        let username = username.trim();
        if username.is_empty() {
            return false;
        }

        ctx.config
            .contributors
            .close_contributors
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run() {
        let mut ctx = CoreContextTest::new();
        ctx.config.contributors.close_contributors = vec!["BabyElias".into(), "thesujai".into()];

        assert!(CheckCloseContributor.run(&ctx.as_context(), "babyelias").await);
        assert!(CheckCloseContributor.run(&ctx.as_context(), " TheSujai ").await);
        assert!(!CheckCloseContributor.run(&ctx.as_context(), "extUser").await);
        assert!(!CheckCloseContributor.run(&ctx.as_context(), "").await);
    }
}

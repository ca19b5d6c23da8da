use async_trait::async_trait;
use contribot_ghapi_interface::types::GhAuthorAssociation;
use shaku::{Component, HasComponent, Interface};
use tracing::warn;

use crate::{use_cases::contributors::CheckCloseContributorInterface, CoreContext};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CheckContributorInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        username: &str,
        author_association: GhAuthorAssociation,
    ) -> bool;
}

/// Tell whether an author is a community contributor, i.e. not part of the core team.
///
/// Owners and bots never are. Members only are when listed as close contributors,
/// as some of them join organization teams (GSoC, community guides).
#[derive(Component)]
#[shaku(interface = CheckContributorInterface)]
pub(crate) struct CheckContributor;

#[async_trait]
impl CheckContributorInterface for CheckContributor {
    #[tracing::instrument(skip(self, ctx), fields(author_association = %author_association), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        username: &str,
        author_association: GhAuthorAssociation,
    ) -> bool {
        if username.is_empty() {
            warn!("Missing username");
            return false;
        }

        if author_association == GhAuthorAssociation::Owner {
            return false;
        }

        if ctx
            .config
            .contributors
            .bot_usernames
            .iter()
            .any(|b| b == username)
        {
            return false;
        }

        let check_close_contributor: &dyn CheckCloseContributorInterface =
            ctx.core_module.resolve_ref();
        let is_close = check_close_contributor.run(ctx, username).await;

        author_association != GhAuthorAssociation::Member || is_close
    }
}

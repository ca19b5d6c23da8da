use std::collections::HashSet;

use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListTeamMembersInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, organization: &str)
        -> Result<HashSet<String>>;
}

/// Collect the logins of every organization member, across all pages.
#[derive(Component)]
#[shaku(interface = ListTeamMembersInterface)]
pub(crate) struct ListTeamMembers;

#[async_trait]
impl ListTeamMembersInterface for ListTeamMembers {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        organization: &str,
    ) -> Result<HashSet<String>> {
        Ok(ctx
            .api_service
            .org_members_list(organization)
            .await?
            .into_iter()
            .map(|member| member.login)
            .collect())
    }
}

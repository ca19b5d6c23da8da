use std::collections::HashSet;

use async_trait::async_trait;
use contribot_ghapi_interface::types::GhIssue;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListCommunityAssignedIssuesInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        organization: &str,
        repository: &str,
        team_members: &HashSet<String>,
    ) -> Result<Vec<String>>;
}

/// List the web URLs of open issues assigned outside of the team, for one repository.
#[derive(Component)]
#[shaku(interface = ListCommunityAssignedIssuesInterface)]
pub(crate) struct ListCommunityAssignedIssues;

#[async_trait]
impl ListCommunityAssignedIssuesInterface for ListCommunityAssignedIssues {
    #[tracing::instrument(skip(self, ctx, team_members), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        organization: &str,
        repository: &str,
        team_members: &HashSet<String>,
    ) -> Result<Vec<String>> {
        let issues = ctx
            .api_service
            .issues_list_open(organization, repository)
            .await?;

        Ok(filter_external_issues(&issues, team_members)
            .into_iter()
            .map(|issue| issue.html_url.clone())
            .collect())
    }
}

/// Keep issues whose primary assignee is not a team member.
pub fn filter_external_issues<'i>(
    issues: &'i [GhIssue],
    team_members: &HashSet<String>,
) -> Vec<&'i GhIssue> {
    issues
        .iter()
        .filter(|issue| {
            issue
                .assignee
                .as_ref()
                .is_some_and(|assignee| !team_members.contains(&assignee.login))
        })
        .collect()
}

use async_trait::async_trait;
use clap::Parser;
use contribot_core::use_cases::reports::{
    ListCommunityAssignedIssuesInterface, ListTeamMembersInterface,
};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List open issues assigned to people outside of the organization
#[derive(Debug, Parser)]
pub(crate) struct CommunityIssuesCommand;

#[async_trait]
impl Command for CommunityIssuesCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let core_ctx = ctx.as_core_context();
        let organization = &ctx.config.report.organization;
        let repositories = &ctx.config.report.repositories;

        let list_team_members: &dyn ListTeamMembersInterface = ctx.core_module.resolve_ref();
        let team_members = list_team_members.run(&core_ctx, organization).await?;
        writeln!(
            ctx.writer.write().await,
            "Found {} team members in {}.",
            team_members.len(),
            organization
        )?;

        writeln!(
            ctx.writer.write().await,
            "Processing {} repositories in {}...",
            repositories.len(),
            organization
        )?;

        let list_community_assigned_issues: &dyn ListCommunityAssignedIssuesInterface =
            ctx.core_module.resolve_ref();
        let mut issue_urls = Vec::new();
        for repository in repositories {
            writeln!(
                ctx.writer.write().await,
                "Processing repository: {}",
                repository
            )?;
            issue_urls.extend(
                list_community_assigned_issues
                    .run(&core_ctx, organization, repository, &team_members)
                    .await?,
            );
        }

        for url in issue_urls {
            writeln!(ctx.writer.write().await, "{}", url)?;
        }

        Ok(())
    }
}

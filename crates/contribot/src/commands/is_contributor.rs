use async_trait::async_trait;
use clap::Parser;
use contribot_core::use_cases::contributors::CheckContributorInterface;
use contribot_ghapi_interface::types::GhAuthorAssociation;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::write_action_output,
    Result,
};

/// Tell whether an author is a community contributor, from its author association
#[derive(Debug, Parser)]
pub(crate) struct IsContributorCommand {
    /// Username
    #[arg(long)]
    username: String,
    /// Author association, as found in the event payload (e.g. MEMBER, CONTRIBUTOR)
    #[arg(long)]
    author_association: GhAuthorAssociation,
}

#[async_trait]
impl Command for IsContributorCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let check_contributor: &dyn CheckContributorInterface = ctx.core_module.resolve_ref();
        let is_contributor = check_contributor
            .run(&ctx.as_core_context(), &self.username, self.author_association)
            .await;

        if !ctx.config.event.output_path.is_empty() {
            write_action_output(
                &ctx.config.event.output_path,
                "is_contributor",
                is_contributor,
            )?;
        }

        writeln!(ctx.writer.write().await, "is_contributor={}", is_contributor)?;
        Ok(())
    }
}

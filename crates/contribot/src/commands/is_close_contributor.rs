use async_trait::async_trait;
use clap::Parser;
use contribot_core::use_cases::contributors::CheckCloseContributorInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::write_action_output,
    Result,
};

/// Tell whether a user is listed as a close contributor
#[derive(Debug, Parser)]
pub(crate) struct IsCloseContributorCommand {
    /// Username
    #[arg(long)]
    username: String,
}

#[async_trait]
impl Command for IsCloseContributorCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let check_close_contributor: &dyn CheckCloseContributorInterface =
            ctx.core_module.resolve_ref();
        let is_close_contributor = check_close_contributor
            .run(&ctx.as_core_context(), &self.username)
            .await;

        if !ctx.config.event.output_path.is_empty() {
            write_action_output(
                &ctx.config.event.output_path,
                "is_close_contributor",
                is_close_contributor,
            )?;
        }

        writeln!(
            ctx.writer.write().await,
            "is_close_contributor={}",
            is_close_contributor
        )?;
        Ok(())
    }
}

use async_trait::async_trait;
use clap::Parser;
use contribot_core::use_cases::events::ProcessAssignmentEventInterface;
use contribot_models::RepositoryPath;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::read_event_payload,
    Result,
};

/// Add or remove the community contribution label from an issue assignment event
#[derive(Debug, Parser)]
pub(crate) struct LabelEventCommand;

#[async_trait]
impl Command for LabelEventCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let repository_path = RepositoryPath::try_from(ctx.config.event.repository.as_str())?;
        let event = read_event_payload(&ctx.config.event.path)?;

        let process_assignment_event: &dyn ProcessAssignmentEventInterface =
            ctx.core_module.resolve_ref();
        let update = process_assignment_event
            .run(&ctx.as_core_context(), &repository_path, &event)
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Issue #{} from '{}' ({}): {}.",
            event.issue.number,
            repository_path,
            event.action,
            update
        )?;
        Ok(())
    }
}

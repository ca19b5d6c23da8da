//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use contribot_config::Config;
use contribot_core::{CoreContext, CoreModule};
use contribot_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{
    community_issues::CommunityIssuesCommand, is_close_contributor::IsCloseContributorCommand,
    is_contributor::IsContributorCommand, label_event::LabelEventCommand,
};
use crate::{config_validator::ValidationScope, Result};

mod community_issues;
mod is_close_contributor;
mod is_contributor;
mod label_event;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    LabelEvent(LabelEventCommand),
    CommunityIssues(CommunityIssuesCommand),
    IsContributor(IsContributorCommand),
    IsCloseContributor(IsCloseContributorCommand),
}

impl SubCommand {
    /// Which part of the configuration the command depends on.
    pub(crate) fn validation_scope(&self) -> ValidationScope {
        match self {
            Self::LabelEvent(_) => ValidationScope::LabelEvent,
            Self::CommunityIssues(_) => ValidationScope::CommunityIssues,
            Self::IsContributor(_) | Self::IsCloseContributor(_) => {
                ValidationScope::Contributors
            }
        }
    }
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::LabelEvent(sub) => sub.execute(ctx).await,
            Self::CommunityIssues(sub) => sub.execute(ctx).await,
            Self::IsContributor(sub) => sub.execute(ctx).await,
            Self::IsCloseContributor(sub) => sub.execute(ctx).await,
        }
    }
}

use std::sync::Arc;

use clap::Parser;
use contribot_config::{ApiDriver, Config};
use contribot_core::CoreModule;
use contribot_ghapi_github::GitHubApiService;
use contribot_ghapi_interface::ApiService;
use contribot_ghapi_null::NullApiService;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    config_validator::validate_configuration,
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        // Nothing touches the network before the configuration is known to be complete.
        validate_configuration(&config, args.cmd.validation_scope())?;

        let api_service: Box<dyn ApiService + Send + Sync + 'static> = {
            if config.api.driver == ApiDriver::GitHub {
                info!("Using GitHubApiService API driver");
                Box::new(GitHubApiService::new(config.clone())?)
            } else {
                info!("Using NullApiService API driver");
                Box::new(NullApiService::new())
            }
        };

        let ctx = CommandContext {
            config,
            api_service,
            core_module: CoreModule::builder().build(),
            writer: Arc::new(RwLock::new(std::io::stdout())),
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(Self::parse_args_async(args, ctx))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}

//! Command routing logic for CLI

use crate::args::{Cli, Commands, registered_or_known};
use crate::commands;
use relay_core::RelayConfig;
use relay_core::error::RelayResult;
use tracing::debug;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, config: RelayConfig) -> RelayResult<()> {
    debug!(
        "Routing {} command (proxy: {})",
        cli.command.name(),
        config.proxy_url()
    );

    match cli.command {
        Commands::Routes { registered } => {
            commands::routes::show(&config, &registered_or_known(&registered), cli.verbose);
            Ok(())
        }
        Commands::Resolve { model, registered } => {
            commands::resolve::show(&config, &registered_or_known(&registered), &model);
            Ok(())
        }
        Commands::Models { json } => commands::models::list(config, json).await,
    }
}

//! Relay CLI
//!
//! Inspects the provider fallback chain that Relay builds from the current
//! configuration.
//!
//! - `relay routes` prints the chain in priority order
//! - `relay resolve <model>` shows which provider a requested model goes to first
//! - `relay models` lists the models a caller may request
//!
//! Set `RUST_LOG` to override the configured log filter.

mod args;
mod commands;
mod console;
mod router;

use clap::Parser;
use relay_core::config::{LoggingConfig, load_config_with_file};
use tracing_subscriber::EnvFilter;

pub use args::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config_with_file(cli.config.as_deref())?;

    init_logging(&config.logging, cli.verbose);
    match &cli.config {
        Some(path) => tracing::debug!("Using configuration file {}", path.display()),
        None => tracing::debug!("Using default configuration sources"),
    }

    router::route(cli, config).await?;
    Ok(())
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let directive = if verbose {
        "debug".to_string()
    } else {
        logging.filter_directive()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // Logs go to stderr so command output stays machine-readable
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.is_json() {
        builder.json().init();
    } else if logging.is_compact() {
        builder.compact().init();
    } else {
        builder.pretty().init();
    }
}

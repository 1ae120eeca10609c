//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use relay_core::ProviderId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Relay - failover dispatch across LLM providers")]
#[command(
    long_about = r#"Relay - failover dispatch across LLM providers

USAGE:
  relay routes                         # Show the fallback chain
  relay routes --registered proxy      # Chain when only the proxy is available
  relay resolve claude-3-haiku         # Which provider a model is tried on first
  relay models --json                  # List requestable models as JSON

Configuration is read from relay.toml, relay.json or ~/.relay/config.toml,
then from .env and the environment (GEMINI_API_KEY, ANTHROPIC_API_KEY, ...)."#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Print the fallback chain in priority order
    Routes {
        /// Providers with a registered handle (default: all known)
        #[arg(long, value_delimiter = ',')]
        registered: Vec<ProviderId>,
    },

    /// Show which chain entry a requested model is tried on first
    Resolve {
        /// Requested model name
        model: String,

        /// Providers with a registered handle (default: all known)
        #[arg(long, value_delimiter = ',')]
        registered: Vec<ProviderId>,
    },

    /// List models a caller may request
    Models {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Routes { .. } => "routes",
            Commands::Resolve { .. } => "resolve",
            Commands::Models { .. } => "models",
        }
    }
}

/// Registered ids to plan with, defaulting to every known provider
pub fn registered_or_known(registered: &[ProviderId]) -> Vec<ProviderId> {
    if registered.is_empty() {
        ProviderId::KNOWN.to_vec()
    } else {
        registered.to_vec()
    }
}

//! Built-in defaults and the convenience loaders

use super::env_loader::apply_env;
use super::file_loader::load_from_file;
use super::model::RelayConfig;
use crate::error::RelayResult;
use std::path::{Path, PathBuf};

/// Local LiteLLM-compatible proxy
pub const DEFAULT_PROXY_URL: &str = "http://localhost:4000";
/// Model requested through the proxy when none is configured
pub const DEFAULT_PROXY_MODEL: &str = "ollama/llama3.1";
/// Local Ollama daemon
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_GOOGLE_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Load configuration from the default file locations and the environment
///
/// Loads configuration in this order:
/// 1. Default configuration
/// 2. relay.toml, relay.json or ~/.relay/config.toml (first one found)
/// 3. .env file in the working directory
/// 4. Environment variables
pub fn load_config() -> RelayResult<RelayConfig> {
    load_config_with_file(None)
}

/// Load configuration with an optional explicit file
///
/// An explicit file that does not exist is treated like an empty file.
pub fn load_config_with_file(config_file: Option<&Path>) -> RelayResult<RelayConfig> {
    let mut config = match config_file {
        Some(path) => load_from_file(path)?,
        None => match default_config_file() {
            Some(path) => load_from_file(&path)?,
            None => RelayConfig::default(),
        },
    };

    // A .env file never overrides variables already present in the environment
    if let Ok(path) = dotenv::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    apply_env(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn default_config_file() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("relay.toml"), PathBuf::from("relay.json")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".relay").join("config.toml"));
    }
    candidates.into_iter().find(|p| p.exists())
}

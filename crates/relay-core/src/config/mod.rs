//! Configuration management for Relay
//!
//! Configuration is read once at startup and handed to the chain builder.
//! Sources, lowest precedence first: built-in defaults, a config file,
//! a `.env` file, and the process environment.

mod defaults;
mod env_loader;
mod file_loader;
mod logging_config;
mod model;

pub use defaults::{
    DEFAULT_ANTHROPIC_MODEL, DEFAULT_GOOGLE_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_OPENAI_MODEL,
    DEFAULT_PROXY_MODEL, DEFAULT_PROXY_URL, load_config, load_config_with_file,
};
pub use env_loader::env_keys;
pub use file_loader::load_from_file;
pub use logging_config::LoggingConfig;
pub use model::{ProviderSettings, ProxySettings, RelayConfig};

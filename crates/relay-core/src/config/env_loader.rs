//! Environment variable-based configuration loading

use super::model::RelayConfig;

/// Environment variable names read by Relay
pub mod env_keys {
    pub const PROXY_URL: &str = "LLM_PROXY_URL";
    pub const OLLAMA_MODEL: &str = "OLLAMA_MODEL";
    pub const OLLAMA_BASE_URL: &str = "OLLAMA_BASE_URL";
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
    pub const ANTHROPIC_MODEL: &str = "ANTHROPIC_MODEL";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    pub const LOG_LEVEL: &str = "RELAY_LOG_LEVEL";
    pub const LOG_FORMAT: &str = "RELAY_LOG_FORMAT";
}

impl RelayConfig {
    /// Build a configuration from defaults plus the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from defaults plus an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        apply_env(&mut config, lookup);
        config
    }
}

/// Overlay values found through `lookup` onto `config`.
///
/// Empty values are ignored so that `FOO_API_KEY=` does not enable a vendor.
pub(super) fn apply_env<F>(config: &mut RelayConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    set_if_present(&mut config.proxy.url, get(env_keys::PROXY_URL));
    set_if_present(&mut config.proxy.model, get(env_keys::OLLAMA_MODEL));
    set_if_present(&mut config.proxy.ollama_url, get(env_keys::OLLAMA_BASE_URL));

    set_if_present(&mut config.google.api_key, get(env_keys::GEMINI_API_KEY));
    set_if_present(&mut config.google.model, get(env_keys::GEMINI_MODEL));

    set_if_present(&mut config.anthropic.api_key, get(env_keys::ANTHROPIC_API_KEY));
    set_if_present(&mut config.anthropic.model, get(env_keys::ANTHROPIC_MODEL));

    set_if_present(&mut config.openai.api_key, get(env_keys::OPENAI_API_KEY));
    set_if_present(&mut config.openai.model, get(env_keys::OPENAI_MODEL));

    if let Some(level) = get(env_keys::LOG_LEVEL) {
        config.logging.level = level;
    }
    if let Some(format) = get(env_keys::LOG_FORMAT) {
        config.logging.format = format;
    }
}

fn set_if_present(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}

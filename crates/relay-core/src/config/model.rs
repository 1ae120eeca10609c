//! Configuration data model

use super::defaults::{
    DEFAULT_ANTHROPIC_MODEL, DEFAULT_GOOGLE_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_OPENAI_MODEL,
    DEFAULT_PROXY_MODEL, DEFAULT_PROXY_URL,
};
use super::logging_config::LoggingConfig;
use crate::llm::ProviderId;
use serde::{Deserialize, Serialize};

/// Settings for the local proxy provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    /// Proxy endpoint (LiteLLM-compatible)
    pub url: Option<String>,
    /// Model requested through the proxy
    pub model: Option<String>,
    /// Ollama endpoint used for model discovery when the proxy is down
    pub ollama_url: Option<String>,
}

/// Settings for a remote vendor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Access credential; the vendor joins the chain only when set
    pub api_key: Option<String>,
    /// Default model for the vendor
    pub model: Option<String>,
}

impl ProviderSettings {
    /// Settings with an API key and no explicit model
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            model: None,
        }
    }

    /// Set the default model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Whether a non-empty credential is present
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

/// Complete Relay configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub proxy: ProxySettings,
    pub google: ProviderSettings,
    pub anthropic: ProviderSettings,
    pub openai: ProviderSettings,
    pub logging: LoggingConfig,
}

impl RelayConfig {
    /// Proxy endpoint, falling back to the local default
    pub fn proxy_url(&self) -> &str {
        non_empty(&self.proxy.url).unwrap_or(DEFAULT_PROXY_URL)
    }

    /// Ollama endpoint, falling back to the local default
    pub fn ollama_url(&self) -> &str {
        non_empty(&self.proxy.ollama_url).unwrap_or(DEFAULT_OLLAMA_URL)
    }

    /// Settings for a remote vendor. The proxy and custom providers have none.
    pub fn provider(&self, id: &ProviderId) -> Option<&ProviderSettings> {
        match id {
            ProviderId::Google => Some(&self.google),
            ProviderId::Anthropic => Some(&self.anthropic),
            ProviderId::OpenAI => Some(&self.openai),
            ProviderId::Proxy | ProviderId::Custom(_) => None,
        }
    }

    /// Whether a credential is configured for `id`
    pub fn has_credential(&self, id: &ProviderId) -> bool {
        self.provider(id).is_some_and(ProviderSettings::has_api_key)
    }

    /// Configured model for `id`, or its hard-coded default
    pub fn model_for(&self, id: &ProviderId) -> String {
        let (configured, fallback) = match id {
            ProviderId::Proxy => (&self.proxy.model, DEFAULT_PROXY_MODEL),
            ProviderId::Google => (&self.google.model, DEFAULT_GOOGLE_MODEL),
            ProviderId::Anthropic => (&self.anthropic.model, DEFAULT_ANTHROPIC_MODEL),
            ProviderId::OpenAI => (&self.openai.model, DEFAULT_OPENAI_MODEL),
            ProviderId::Custom(name) => return name.clone(),
        };
        non_empty(configured).unwrap_or(fallback).to_string()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

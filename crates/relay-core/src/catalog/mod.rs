//! Catalog of models a caller may request
//!
//! The listing always starts with a virtual entry that dispatches through
//! the whole fallback chain. Proxy models come next, discovered live; when
//! the proxy is unreachable the local Ollama daemon is asked instead. Built-in
//! vendor lists follow for every vendor with a configured credential.

mod builtin;
mod discovery;
mod types;

pub use builtin::{BUILTIN_ORDER, builtin_models};
pub use discovery::{
    OLLAMA_DISCOVERY_TIMEOUT, PROXY_DISCOVERY_TIMEOUT, merge_ollama_models, parse_proxy_models,
};
pub use types::{DEFAULT_CONTEXT_WINDOW, FALLBACK_PROVIDER, ModelDescriptor};

use tracing::{debug, warn};

use crate::config::RelayConfig;
use crate::error::RelayResult;
use crate::llm::ProviderId;

/// Lists models using the configured endpoints and credentials
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    config: RelayConfig,
    client: reqwest::Client,
}

impl ModelCatalog {
    pub fn new(config: RelayConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: RelayConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Build the listing. Discovery failures are logged and skipped.
    pub async fn list(&self) -> Vec<ModelDescriptor> {
        let mut models = vec![ModelDescriptor::fallback(
            self.config.model_for(&ProviderId::Proxy),
        )];

        match self.discover_proxy().await {
            Ok(found) => {
                debug!("Discovered {} model(s) from proxy", found.len());
                models.extend(found);
            }
            Err(err) => {
                warn!("Failed to fetch models from proxy: {}", err);
                self.discover_ollama(&mut models).await;
            }
        }

        for provider in BUILTIN_ORDER {
            if self.config.has_credential(&provider) {
                models.extend(builtin_models(&provider));
            }
        }

        models
    }

    async fn discover_proxy(&self) -> RelayResult<Vec<ModelDescriptor>> {
        let url = format!("{}/model/info", self.config.proxy_url().trim_end_matches('/'));
        let body = discovery::fetch(&self.client, &url, PROXY_DISCOVERY_TIMEOUT).await?;
        parse_proxy_models(&body)
    }

    async fn discover_ollama(&self, models: &mut Vec<ModelDescriptor>) {
        let url = format!("{}/api/tags", self.config.ollama_url().trim_end_matches('/'));
        let result = match discovery::fetch(&self.client, &url, OLLAMA_DISCOVERY_TIMEOUT).await {
            Ok(body) => merge_ollama_models(&body, models),
            Err(err) => Err(err),
        };

        match result {
            Ok(added) => debug!("Discovered {} model(s) from Ollama", added),
            Err(err) => warn!("Failed to fetch models from Ollama: {}", err),
        }
    }
}

//! Builder for creating fallback chains from configuration

use tracing::{debug, error, info, warn};

use super::types::{ChainEntry, FallbackChain, ProviderRoute};
use crate::config::RelayConfig;
use crate::llm::provider::ProviderId;
use crate::llm::registry::ProviderRegistry;

/// Builds the fallback chain once per (re)configuration
///
/// Priority: proxy first whenever it is registered, then google, anthropic
/// and openai, each only when both a credential is configured and a handle
/// is registered.
pub struct ChainBuilder;

impl ChainBuilder {
    /// Compute the ordered routes without attaching handles
    pub fn plan<F>(config: &RelayConfig, is_registered: F) -> Vec<ProviderRoute>
    where
        F: Fn(&ProviderId) -> bool,
    {
        let mut routes = Vec::new();

        // The proxy needs no credential; a local endpoint is assumed when unset
        if is_registered(&ProviderId::Proxy) {
            let model = config.model_for(&ProviderId::Proxy);
            info!(
                "Configured proxy as primary provider: {} (proxy: {})",
                model,
                config.proxy_url()
            );
            routes.push(ProviderRoute::new(ProviderId::Proxy, model));
        } else {
            warn!("Proxy service not available. It will not be used as primary provider.");
        }

        for provider in ProviderId::FALLBACK_ORDER {
            if !config.has_credential(&provider) {
                debug!("{} API key not configured, skipping", provider);
                continue;
            }
            if !is_registered(&provider) {
                debug!("{} has a credential but no registered handle, skipping", provider);
                continue;
            }

            let model = config.model_for(&provider);
            info!(
                "Configured {} as fallback provider #{}: {}",
                provider,
                routes.len() + 1,
                model
            );
            routes.push(ProviderRoute::new(provider, model));
        }

        if routes.is_empty() {
            warn!("No fallback providers configured. Please set at least one provider.");
        } else {
            info!("Initialized fallback chain with {} provider(s)", routes.len());
        }

        routes
    }

    /// Build the chain, attaching the registered handle to every route
    pub fn build(config: &RelayConfig, registry: &ProviderRegistry) -> FallbackChain {
        Self::assemble(Self::plan(config, |id| registry.contains(id)), registry)
    }

    fn assemble(routes: Vec<ProviderRoute>, registry: &ProviderRegistry) -> FallbackChain {
        let entries = routes
            .into_iter()
            .filter_map(|route| {
                registry
                    .get(&route.provider)
                    .map(|service| ChainEntry::new(route.provider, service, route.model))
            })
            .collect();

        FallbackChain::new(entries).unwrap_or_else(|err| {
            error!("Discarding invalid fallback chain: {}", err);
            FallbackChain::empty()
        })
    }
}

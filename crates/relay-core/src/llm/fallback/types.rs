//! Chain entry and chain types

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::resolver::ModelResolver;
use crate::error::{RelayError, RelayResult};
use crate::llm::provider::{CompletionProvider, ProviderId};

/// A provider paired with the model it is asked for by default
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderRoute {
    pub provider: ProviderId,
    pub model: String,
}

impl ProviderRoute {
    pub fn new(provider: ProviderId, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

impl AsRef<ProviderRoute> for ProviderRoute {
    fn as_ref(&self) -> &ProviderRoute {
        self
    }
}

impl fmt::Display for ProviderRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.provider, self.model)
    }
}

/// One position in the fallback chain
#[derive(Clone)]
pub struct ChainEntry {
    route: ProviderRoute,
    service: Arc<dyn CompletionProvider>,
}

impl ChainEntry {
    pub fn new(
        provider: ProviderId,
        service: Arc<dyn CompletionProvider>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            route: ProviderRoute::new(provider, model),
            service,
        }
    }

    pub fn provider(&self) -> &ProviderId {
        &self.route.provider
    }

    /// Model this entry is invoked with during the chain walk
    pub fn model(&self) -> &str {
        &self.route.model
    }

    pub fn route(&self) -> &ProviderRoute {
        &self.route
    }

    pub fn service(&self) -> &Arc<dyn CompletionProvider> {
        &self.service
    }
}

impl AsRef<ProviderRoute> for ChainEntry {
    fn as_ref(&self) -> &ProviderRoute {
        &self.route
    }
}

impl fmt::Debug for ChainEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainEntry")
            .field("provider", &self.route.provider)
            .field("model", &self.route.model)
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable list of providers to try. Index 0 is the primary.
#[derive(Debug, Clone, Default)]
pub struct FallbackChain {
    entries: Vec<ChainEntry>,
}

impl FallbackChain {
    /// Create a chain from ordered entries.
    ///
    /// Fails if two entries share a provider id.
    pub fn new(entries: Vec<ChainEntry>) -> RelayResult<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.provider() == entry.provider()) {
                return Err(RelayError::config(format!(
                    "Provider '{}' appears more than once in the fallback chain",
                    entry.provider()
                )));
            }
        }
        Ok(Self { entries })
    }

    /// A chain with no providers; every dispatch fails fast
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChainEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The primary entry
    pub fn head(&self) -> Option<&ChainEntry> {
        self.entries.first()
    }

    pub fn get(&self, provider: &ProviderId) -> Option<&ChainEntry> {
        self.entries.iter().find(|e| e.provider() == provider)
    }

    /// Snapshot of (provider, default model) pairs in chain order
    pub fn routes(&self) -> Vec<ProviderRoute> {
        self.entries.iter().map(|e| e.route.clone()).collect()
    }

    /// Entry that should be tried first for an explicitly requested model
    pub fn resolve(&self, model: &str) -> Option<&ChainEntry> {
        ModelResolver::resolve(model, &self.entries).map(|i| &self.entries[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::MockCompletionProvider;

    fn entry(provider: ProviderId, model: &str) -> ChainEntry {
        ChainEntry::new(provider, Arc::new(MockCompletionProvider::new()), model)
    }

    #[test]
    fn test_chain_accessors() {
        let chain = FallbackChain::new(vec![
            entry(ProviderId::Proxy, "ollama/llama3.1"),
            entry(ProviderId::Google, "gemini-2.0-flash-exp"),
        ])
        .unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.head().unwrap().provider(), &ProviderId::Proxy);
        assert_eq!(
            chain.get(&ProviderId::Google).unwrap().model(),
            "gemini-2.0-flash-exp"
        );
        assert!(chain.get(&ProviderId::OpenAI).is_none());
        assert_eq!(
            chain.routes(),
            vec![
                ProviderRoute::new(ProviderId::Proxy, "ollama/llama3.1"),
                ProviderRoute::new(ProviderId::Google, "gemini-2.0-flash-exp"),
            ]
        );
    }

    #[test]
    fn test_duplicate_provider_rejected() {
        let result = FallbackChain::new(vec![
            entry(ProviderId::Google, "a"),
            entry(ProviderId::Google, "b"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_chain_is_valid() {
        let chain = FallbackChain::empty();
        assert!(chain.is_empty());
        assert!(chain.head().is_none());
        assert!(chain.routes().is_empty());
    }

    #[test]
    fn test_entry_debug_hides_service() {
        let e = entry(ProviderId::OpenAI, "gpt-4o");
        let debug = format!("{:?}", e);
        assert!(debug.contains("OpenAI"));
        assert!(debug.contains("gpt-4o"));
    }

    #[test]
    fn test_route_display() {
        let route = ProviderRoute::new(ProviderId::Anthropic, "claude-3-5-sonnet-20241022");
        assert_eq!(route.to_string(), "anthropic (claude-3-5-sonnet-20241022)");
    }
}

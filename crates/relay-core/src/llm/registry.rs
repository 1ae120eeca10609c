//! Explicit table of provider handles
//!
//! Built once at startup by the composition root and passed to the chain
//! builder. Relay never constructs providers on its own.

use super::provider::{CompletionProvider, ProviderId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Mapping from provider id to a handle capable of generating completions
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderId, Arc<dyn CompletionProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle, replacing any previous one for `id`
    pub fn register(&mut self, id: ProviderId, provider: Arc<dyn CompletionProvider>) {
        self.providers.insert(id, provider);
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, id: ProviderId, provider: Arc<dyn CompletionProvider>) -> Self {
        self.register(id, provider);
        self
    }

    pub fn get(&self, id: &ProviderId) -> Option<Arc<dyn CompletionProvider>> {
        self.providers.get(id).cloned()
    }

    pub fn contains(&self, id: &ProviderId) -> bool {
        self.providers.contains_key(id)
    }

    /// Registered ids, sorted by name
    pub fn ids(&self) -> Vec<ProviderId> {
        let mut ids: Vec<_> = self.providers.keys().cloned().collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.ids())
            .finish()
    }
}

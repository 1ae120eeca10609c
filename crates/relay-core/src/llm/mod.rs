//! LLM provider capability, registry and failover dispatch

pub mod fallback;
pub mod messages;
pub mod provider;
pub mod registry;

pub use fallback::{
    ChainBuilder, ChainEntry, DispatchError, DispatchReport, DispatchRequest, Dispatcher,
    FallbackChain, ModelResolver, ProviderRoute,
};
pub use messages::{LlmMessage, LlmResponse, MessageRole, TokenUsage};
pub use provider::{CompletionProvider, ProviderError, ProviderId};
pub use registry::ProviderRegistry;

#[cfg(test)]
pub use provider::MockCompletionProvider;

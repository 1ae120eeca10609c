//! Relay core library
//!
//! Routes completion requests across a prioritized chain of LLM providers,
//! falling back to the next provider whenever one fails. Also provides the
//! configuration layer and the model catalog used by the CLI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;

// Re-export commonly used types
pub use catalog::{ModelCatalog, ModelDescriptor};
pub use config::{LoggingConfig, RelayConfig, load_config};
pub use error::{RelayError, RelayResult};
pub use llm::{
    ChainBuilder, ChainEntry, CompletionProvider, DispatchError, DispatchReport, DispatchRequest,
    Dispatcher, FallbackChain, LlmMessage, LlmResponse, ModelResolver, ProviderError, ProviderId,
    ProviderRegistry, ProviderRoute,
};

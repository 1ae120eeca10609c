//! Provider fallback chain
//!
//! This module routes one logical completion request across a prioritized
//! list of backend providers until one succeeds or all have failed.
//!
//! - [`ChainBuilder`] turns configuration plus a [`ProviderRegistry`] into an
//!   immutable [`FallbackChain`].
//! - [`ModelResolver`] maps an explicitly requested model name to the chain
//!   entry that should be tried first.
//! - [`Dispatcher`] walks the chain, aggregates per-provider failures and
//!   honors cancellation.
//!
//! [`ProviderRegistry`]: crate::llm::ProviderRegistry

mod builder;
mod dispatcher;
mod errors;
mod report;
mod request;
mod resolver;
mod types;

#[cfg(test)]
mod tests;

pub use builder::ChainBuilder;
pub use dispatcher::Dispatcher;
pub use errors::{AttemptErrors, DispatchError, ProviderFailure};
pub use report::{AttemptPhase, AttemptRecord, AttemptResult, DispatchReport};
pub use request::DispatchRequest;
pub use resolver::{ModelResolver, ResolutionRule};
pub use types::{ChainEntry, FallbackChain, ProviderRoute};

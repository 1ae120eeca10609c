//! Error types for Relay
//!
//! [`RelayError`] covers configuration, discovery and I/O failures. The
//! failures of a single provider call and of a whole dispatch have their own
//! types, [`crate::llm::ProviderError`] and
//! [`crate::llm::fallback::DispatchError`], which convert into `RelayError`
//! at the edges of the library.

mod constructors;
mod conversions;
mod types;

pub use types::{RelayError, RelayResult};

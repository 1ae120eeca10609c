//! Core error type for Relay

use thiserror::Error;

/// Result type alias for Relay operations
pub type RelayResult<T> = Result<T, RelayError>;

/// Main error type for Relay
#[derive(Error, Debug, Clone)]
pub enum RelayError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// LLM dispatch errors
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        provider: Option<String>,
    },

    /// HTTP request errors
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io { message: String },

    /// The caller cancelled the operation
    #[error("Operation was cancelled")]
    Cancelled,

    /// Generic error
    #[error("Error: {0}")]
    Other(String),
}

impl RelayError {
    /// Context attached to the error, if any
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            _ => None,
        }
    }

    /// Provider the error originated from, if known
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::Llm { provider, .. } => provider.as_deref(),
            _ => None,
        }
    }

    /// Whether this error represents a caller-initiated abort
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

//! Provider identity, capability trait and error type

use super::messages::{LlmMessage, LlmResponse};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Identifier of a backend family
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ProviderId {
    /// Local LiteLLM-compatible proxy (usually fronting Ollama)
    Proxy,
    /// Google (Gemini models)
    Google,
    /// Anthropic (Claude models)
    Anthropic,
    /// OpenAI (GPT models)
    OpenAI,
    /// Any other registered backend
    Custom(String),
}

impl ProviderId {
    /// Remote vendors in the order they join the fallback chain
    pub const FALLBACK_ORDER: [ProviderId; 3] =
        [ProviderId::Google, ProviderId::Anthropic, ProviderId::OpenAI];

    /// Every built-in family, proxy first
    pub const KNOWN: [ProviderId; 4] = [
        ProviderId::Proxy,
        ProviderId::Google,
        ProviderId::Anthropic,
        ProviderId::OpenAI,
    ];

    /// Get the provider name as a string
    pub fn as_str(&self) -> &str {
        match self {
            ProviderId::Proxy => "proxy",
            ProviderId::Google => "google",
            ProviderId::Anthropic => "anthropic",
            ProviderId::OpenAI => "openai",
            ProviderId::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for ProviderId {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "proxy" => ProviderId::Proxy,
            "google" => ProviderId::Google,
            "anthropic" => ProviderId::Anthropic,
            "openai" => ProviderId::OpenAI,
            _ => ProviderId::Custom(s),
        }
    }
}

impl From<ProviderId> for String {
    fn from(id: ProviderId) -> Self {
        id.as_str().to_string()
    }
}

/// Failure of a single provider invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The caller aborted the request
    #[error("Request was cancelled")]
    Cancelled,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The provider's own request timeout elapsed
    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    /// Whether this failure is a caller-initiated abort.
    ///
    /// Timeouts are not: they are the provider's own failure and the chain
    /// walk continues past them.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Capability every backend implements
///
/// Implementations own request translation, transport and their own request
/// timeout. A timeout must surface as [`ProviderError::Timeout`], never as
/// [`ProviderError::Cancelled`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion with `model`
    async fn generate(
        &self,
        system_prompt: &str,
        messages: &[LlmMessage],
        model: &str,
        use_tools: bool,
        cancel: &CancellationToken,
    ) -> Result<LlmResponse, ProviderError>;
}

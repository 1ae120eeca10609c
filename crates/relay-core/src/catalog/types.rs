//! Model descriptor type

use serde::{Deserialize, Serialize};

/// Context window reported for models whose real window is unknown
pub const DEFAULT_CONTEXT_WINDOW: u32 = 128_000;

/// Provider label of the virtual entry that routes through the whole chain
pub const FALLBACK_PROVIDER: &str = "fallback";

/// A model a caller may request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Where the model is served from (`fallback`, `proxy`, or a vendor id)
    pub provider: String,
    /// Name passed as the explicit model of a dispatch
    pub name: String,
    /// Human-readable label
    pub title: String,
    pub context_window: u32,
}

impl ModelDescriptor {
    pub fn new(
        provider: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        context_window: u32,
    ) -> Self {
        Self {
            provider: provider.into(),
            name: name.into(),
            title: title.into(),
            context_window,
        }
    }

    /// The entry that dispatches through the full fallback chain
    pub fn fallback(proxy_model: impl Into<String>) -> Self {
        Self::new(
            FALLBACK_PROVIDER,
            proxy_model,
            "Ollama (with fallback chain)",
            DEFAULT_CONTEXT_WINDOW,
        )
    }
}

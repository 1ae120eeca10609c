//! Dispatch request

use tokio_util::sync::CancellationToken;

use crate::llm::messages::LlmMessage;

/// One logical completion request
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub system_prompt: String,
    /// Conversation history in order
    pub messages: Vec<LlmMessage>,
    /// Explicitly requested model; tried first when it resolves to an entry
    pub model: Option<String>,
    pub use_tools: bool,
    pub cancellation: Option<CancellationToken>,
}

impl DispatchRequest {
    pub fn new(system_prompt: impl Into<String>, messages: Vec<LlmMessage>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            messages,
            model: None,
            use_tools: true,
            cancellation: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_tools(mut self, use_tools: bool) -> Self {
        self.use_tools = use_tools;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Explicit model, ignoring empty strings
    pub(super) fn explicit_model(&self) -> Option<&str> {
        self.model.as_deref().filter(|m| !m.is_empty())
    }
}

//! LLM message types and structures

use serde::{Deserialize, Serialize};

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System message (instructions)
    System,
    /// User message (human input)
    User,
    /// Assistant message (AI response)
    Assistant,
    /// Tool message (tool execution result)
    Tool,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
            MessageRole::Tool => write!(f, "tool"),
        }
    }
}

/// A message in the conversation history
///
/// Content is kept as JSON so that providers can carry their own block
/// formats (text, tool calls, images) without the dispatcher knowing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmMessage {
    pub role: MessageRole,
    pub content: serde_json::Value,
}

impl LlmMessage {
    /// Create a message with plain text content
    pub fn text(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            role,
            content: serde_json::Value::String(text.into()),
        }
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::text(MessageRole::User, text)
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::text(MessageRole::Assistant, text)
    }

    /// Plain text content, if the message carries a bare string
    pub fn as_text(&self) -> Option<&str> {
        self.content.as_str()
    }
}

/// Token usage reported by a provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Response produced by a provider
///
/// Passed back to the caller exactly as the provider returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Content blocks in the provider's format
    pub content: Vec<serde_json::Value>,
    /// Model that produced the response
    pub model: String,
    /// Tool calls requested by the model
    #[serde(default)]
    pub tool_calls: Vec<serde_json::Value>,
    /// Token usage, when the provider reports it
    pub usage: Option<TokenUsage>,
    /// Why generation stopped
    pub finish_reason: Option<String>,
}

impl LlmResponse {
    /// Response consisting of a single text block
    pub fn text(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            content: vec![serde_json::json!({ "type": "text", "text": text.into() })],
            model: model.into(),
            ..Self::default()
        }
    }
}

//! Chat completion data model.
//!
//! Requests and responses mirror the wire shapes the GenAI semantic
//! conventions expect: input messages as role/content pairs, output
//! messages as indexed choices carrying a finish reason. Message lists
//! are serialized to JSON text when recorded on spans.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// A single message sent to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMessage {
    /// Speaker role ("user", "system", "assistant").
    pub role: String,
    pub content: String,
}

impl InputMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// One generated choice returned by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputMessage {
    /// Position of this choice in the response.
    pub index: i64,
    pub message: MessageContent,
    /// Why generation stopped for this choice (e.g. "stop", "length").
    pub finish_reason: String,
}

impl OutputMessage {
    /// An assistant choice at the given index.
    pub fn assistant(
        index: i64,
        content: impl Into<String>,
        finish_reason: impl Into<String>,
    ) -> Self {
        Self {
            index,
            message: MessageContent {
                role: "assistant".to_string(),
                content: content.into(),
            },
            finish_reason: finish_reason.into(),
        }
    }
}

/// Role and text of a generated message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageContent {
    pub role: String,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Usage
// ---------------------------------------------------------------------------

/// Token usage reported by the provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: i64,
    pub output_tokens: i64,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Parameters of a chat completion request, as recorded on the span.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Provider identifier, e.g. "openai", "anthropic".
    pub provider: String,
    /// Requested model identifier, e.g. "gpt-4".
    pub model: String,
    pub temperature: f64,
    pub max_tokens: i64,
    /// Number of choices requested.
    pub choice_count: i64,
    pub system_instructions: String,
    pub messages: Vec<InputMessage>,
}

impl ChatRequest {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            temperature: 1.0,
            max_tokens: 0,
            choice_count: 1,
            system_instructions: String::new(),
            messages: Vec::new(),
        }
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: i64) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn choice_count(mut self, choice_count: i64) -> Self {
        self.choice_count = choice_count;
        self
    }

    pub fn system_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.system_instructions = instructions.into();
        self
    }

    pub fn message(mut self, message: InputMessage) -> Self {
        self.messages.push(message);
        self
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// A completed chat response, as recorded on the span.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Provider-assigned response id.
    pub id: String,
    /// The model that actually served the request (may differ from the
    /// requested alias, e.g. "gpt-4" -> "gpt-4-0613").
    pub model: String,
    /// Finish reason of the primary choice.
    pub finish_reason: String,
    pub messages: Vec<OutputMessage>,
    pub usage: TokenUsage,
}

use crate::llm::Generation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Free-form label interpolated into the prompt; never validated.
    #[serde(default = "default_reasoning_level")]
    pub reasoning_level: String,
    /// Pre-serialized training history.
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            reasoning_level: default_reasoning_level(),
            context: None,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_reasoning_level(mut self, level: impl Into<String>) -> Self {
        self.reasoning_level = level.into();
        self
    }

    pub fn context(&self) -> &str {
        self.context.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            response: String::new(),
            error: Some(error.into()),
        }
    }
}

/// Where a chat answer came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Canned advice from the keyword table; no backend was called.
    Quick {
        category: &'static str,
        text: &'static str,
    },
    Model(Generation),
}

impl From<Generation> for ChatResponse {
    fn from(generation: Generation) -> Self {
        match generation {
            Generation::Answer(text) | Generation::Degraded { text, .. } => Self::ok(text),
            Generation::Failed(message) => Self::failed(message),
        }
    }
}

impl From<Reply> for ChatResponse {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::Quick { text, .. } => Self::ok(text),
            Reply::Model(generation) => generation.into(),
        }
    }
}

/// Level used when a caller omits `reasoning_level`.
pub fn default_reasoning_level() -> String {
    "medium".to_string()
}

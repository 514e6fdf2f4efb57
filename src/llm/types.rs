use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// What the gateway is asking the backend to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Chat,
    Analysis,
}

/// How a backend wants its prompt shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptFormat {
    /// One instruction string (completion endpoints).
    Text,
    /// Role-tagged turns rendered through a chat template.
    Messages,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    Text(String),
    Messages(Vec<ChatMessage>),
}

impl Prompt {
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Messages(messages) => messages
                .into_iter()
                .map(|m| m.content)
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }

    pub fn into_messages(self) -> Vec<ChatMessage> {
        match self {
            Self::Text(text) => vec![ChatMessage::user(text)],
            Self::Messages(messages) => messages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub task: Task,
    /// The caller's raw message, before any templating.
    pub message: String,
    pub prompt: Prompt,
    pub reasoning_level: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedReason {
    /// The generated text never contained the assistant-start delimiter.
    MissingDelimiter,
    /// The daemon answered 200 without a `response` field.
    MissingResponseField,
}

/// Outcome of exactly one backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Generation {
    Answer(String),
    Degraded { text: String, reason: DegradedReason },
    /// Human-readable (Spanish) description of the failure.
    Failed(String),
}

impl Generation {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

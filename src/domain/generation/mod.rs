pub mod kind;
pub mod prompts;
pub mod service;

pub use kind::GenerationKind;
pub use prompts::GenerationPrompt;
pub use service::{GenerationService, GenerationServiceApi};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One turn of a conversation, also accepted as client-supplied history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub tokens_used: Option<u32>,
}

/// Text-generation provider
#[async_trait]
pub trait ChatCompletionRepository: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, String>;
}

/// Outcome of a generation call; a failed call still carries text to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Generated {
        text: String,
        tokens_used: Option<u32>,
    },
    Degraded {
        text: String,
    },
}

impl GenerationResult {
    pub fn text(&self) -> &str {
        match self {
            Self::Generated { text, .. } | Self::Degraded { text } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Generated { text, .. } | Self::Degraded { text } => text,
        }
    }

    /// Degraded results report zero usage
    pub fn tokens_used(&self) -> Option<u32> {
        match self {
            Self::Generated { tokens_used, .. } => *tokens_used,
            Self::Degraded { .. } => Some(0),
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

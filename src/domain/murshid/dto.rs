use crate::domain::generation::ChatMessage;
use crate::domain::shared::LanguageCode;
use serde::{Deserialize, Serialize};

pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Request for POST /api/murshid/chat
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub language: LanguageCode,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    pub language: LanguageCode,
    pub timestamp: String,
    pub tokens_used: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyNaseehahResponse {
    pub naseehah: String,
    pub reference: Option<String>,
    pub language: LanguageCode,
    pub date: String,
}

use super::dto::{ChatRequest, ChatResponse, DailyNaseehahResponse, MAX_MESSAGE_CHARS};
use crate::domain::content::ContentServiceError;
use crate::domain::generation::{GenerationPrompt, GenerationResult, GenerationServiceApi};
use crate::domain::shared::LanguageCode;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

const NASEEHAH_REFERENCE: &str = "Quran/Hadith";

/// Message must hold 1 to 1000 characters
pub fn validate_message(message: &str) -> Result<(), ContentServiceError> {
    let length = message.chars().count();
    if length == 0 || length > MAX_MESSAGE_CHARS {
        return Err(ContentServiceError::Invalid(format!(
            "Message must be between 1 and {} characters",
            MAX_MESSAGE_CHARS
        )));
    }
    Ok(())
}

pub struct MurshidService {
    generation: Arc<dyn GenerationServiceApi>,
}

impl MurshidService {
    pub fn new(generation: Arc<dyn GenerationServiceApi>) -> Self {
        Self { generation }
    }
}

#[async_trait]
pub trait MurshidServiceApi: Send + Sync {
    /// Answer a seeker's message; provider failures yield the canned apology
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ContentServiceError>;

    /// Raw chat generation, for flows that must abort on a degraded answer
    async fn reply(&self, message: String, language: LanguageCode) -> GenerationResult;

    async fn daily_naseehah(&self, language: LanguageCode) -> DailyNaseehahResponse;
}

#[async_trait]
impl MurshidServiceApi for MurshidService {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ContentServiceError> {
        validate_message(&request.message)?;

        tracing::info!(
            user_id = request.user_id.as_deref().unwrap_or("anonymous"),
            language = %request.language,
            message_length = request.message.chars().count(),
            history_length = request.conversation_history.len(),
            "Murshid chat request"
        );

        let result = self
            .generation
            .generate(
                GenerationPrompt::Chat {
                    message: request.message,
                    history: request.conversation_history,
                },
                request.language,
            )
            .await;

        Ok(ChatResponse {
            tokens_used: result.tokens_used(),
            response: result.into_text(),
            language: request.language,
            timestamp: Utc::now().to_rfc3339(),
        })
    }

    async fn reply(&self, message: String, language: LanguageCode) -> GenerationResult {
        self.generation
            .generate(
                GenerationPrompt::Chat {
                    message,
                    history: Vec::new(),
                },
                language,
            )
            .await
    }

    async fn daily_naseehah(&self, language: LanguageCode) -> DailyNaseehahResponse {
        let result = self
            .generation
            .generate(GenerationPrompt::DailyNaseehah, language)
            .await;

        let reference = result.succeeded().then(|| NASEEHAH_REFERENCE.to_string());

        DailyNaseehahResponse {
            naseehah: result.into_text(),
            reference,
            language,
            date: Utc::now().date_naive().to_string(),
        }
    }
}

use super::{ChatCompletionRepository, CompletionRequest, GenerationPrompt, GenerationResult};
use crate::domain::shared::LanguageCode;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

pub struct GenerationService {
    chat_repo: Arc<dyn ChatCompletionRepository>,
}

impl GenerationService {
    pub fn new(chat_repo: Arc<dyn ChatCompletionRepository>) -> Self {
        Self { chat_repo }
    }
}

#[async_trait]
pub trait GenerationServiceApi: Send + Sync {
    /// Run one generation; provider failures come back as `Degraded`, never as errors
    async fn generate(&self, prompt: GenerationPrompt, language: LanguageCode) -> GenerationResult;
}

#[async_trait]
impl GenerationServiceApi for GenerationService {
    async fn generate(&self, prompt: GenerationPrompt, language: LanguageCode) -> GenerationResult {
        let kind = prompt.kind();
        let request = CompletionRequest {
            messages: prompt.into_messages(language),
            temperature: kind.temperature(),
            max_tokens: kind.max_tokens(),
        };

        tracing::debug!(
            kind = %kind,
            language = %language,
            message_count = request.messages.len(),
            "Requesting completion"
        );

        let start = Instant::now();
        match self.chat_repo.complete(request).await {
            Ok(completion) if !completion.text.trim().is_empty() => {
                tracing::info!(
                    kind = %kind,
                    tokens_used = ?completion.tokens_used,
                    latency_ms = start.elapsed().as_millis() as u64,
                    "Completion generated"
                );
                GenerationResult::Generated {
                    text: completion.text,
                    tokens_used: completion.tokens_used,
                }
            }
            Ok(_) => {
                tracing::warn!(kind = %kind, "Empty completion, using canned fallback");
                GenerationResult::Degraded {
                    text: kind.canned_fallback().to_string(),
                }
            }
            Err(e) => {
                tracing::error!(kind = %kind, error = %e, "Completion failed, using canned fallback");
                GenerationResult::Degraded {
                    text: kind.canned_fallback().to_string(),
                }
            }
        }
    }
}

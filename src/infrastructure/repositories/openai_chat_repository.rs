use crate::domain::generation::{ChatCompletionRepository, ChatMessage, ChatRole, Completion, CompletionRequest};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI chat completions
pub struct OpenAiChatRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiChatRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }
}

fn to_openai_message(message: ChatMessage) -> Result<ChatCompletionRequestMessage, String> {
    let built = match message.role {
        ChatRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(message.content)
            .build()
            .map(Into::into),
        ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(message.content)
            .build()
            .map(Into::into),
        ChatRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(message.content)
            .build()
            .map(Into::into),
    };
    built.map_err(|e| format!("Invalid chat message: {}", e))
}

#[async_trait]
impl ChatCompletionRepository for OpenAiChatRepository {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, String> {
        let start_time = std::time::Instant::now();
        let message_count = request.messages.len();

        let messages = request
            .messages
            .into_iter()
            .map(to_openai_message)
            .collect::<Result<Vec<_>, _>>()?;

        let openai_request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(messages)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build()
            .map_err(|e| format!("Invalid chat request: {}", e))?;

        tracing::info!(
            model = %self.model,
            message_count,
            max_tokens = request.max_tokens,
            "Calling OpenAI chat completions"
        );

        let response = self.client.chat().create(openai_request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "OpenAI chat completion failed");
            format!("OpenAI chat error: {}", e)
        })?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        let tokens_used = response.usage.map(|usage| usage.total_tokens);

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis() as u64,
            tokens_used = ?tokens_used,
            response_length = text.len(),
            "Chat completion received"
        );

        Ok(Completion { text, tokens_used })
    }
}

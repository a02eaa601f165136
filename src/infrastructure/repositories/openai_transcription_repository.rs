use crate::domain::voice::TranscriptionRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{AudioInput, CreateTranscriptionRequestArgs},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

pub const TRANSCRIPTION_MODEL: &str = "whisper-1";

/// OpenAI Whisper speech-to-text
pub struct OpenAiTranscriptionRepository {
    client: Arc<Client<OpenAIConfig>>,
}

impl OpenAiTranscriptionRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranscriptionRepository for OpenAiTranscriptionRepository {
    async fn transcribe(&self, filename: &str, audio: Vec<u8>) -> Result<String, String> {
        let start_time = std::time::Instant::now();
        let audio_size = audio.len();

        let request = CreateTranscriptionRequestArgs::default()
            .file(AudioInput::from_vec_u8(filename.to_string(), audio))
            .model(TRANSCRIPTION_MODEL)
            .build()
            .map_err(|e| format!("Invalid transcription request: {}", e))?;

        tracing::info!(filename, audio_size, model = TRANSCRIPTION_MODEL, "Calling OpenAI transcription");

        let response = self.client.audio().transcribe(request).await.map_err(|e| {
            tracing::error!(error = %e, filename, audio_size, "OpenAI transcription failed");
            format!("OpenAI transcription error: {}", e)
        })?;

        tracing::info!(
            provider = "openai",
            latency_ms = start_time.elapsed().as_millis() as u64,
            transcript_length = response.text.len(),
            "Transcription completed"
        );

        Ok(response.text)
    }
}

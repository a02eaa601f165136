use crate::domain::voice::{SpeechRepository, SpeechRequest, VoiceSettings, SPEECH_MODEL};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Synthesis of long answers regularly exceeds the content-provider timeout
const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct SynthesisBody<'a> {
    text: &'a str,
    model_id: &'static str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs text-to-speech
pub struct ElevenLabsTtsRepository {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabsTtsRepository {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl SpeechRepository for ElevenLabsTtsRepository {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let voice_id = request.style.voice_id();
        let settings = request.settings();
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, voice_id);

        tracing::info!(
            voice_id,
            language = %request.language,
            speed = settings.speed,
            stability = settings.stability,
            style = settings.style,
            text_length = request.text.len(),
            "Calling ElevenLabs synthesis"
        );

        let response = self
            .client
            .post(&url)
            .timeout(SYNTHESIS_TIMEOUT)
            .header("xi-api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&SynthesisBody {
                text: &request.text,
                model_id: SPEECH_MODEL,
                voice_settings: settings,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice_id, "ElevenLabs request failed");
                format!("ElevenLabs request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(status = status.as_u16(), body = %error_text, voice_id, "ElevenLabs synthesis rejected");
            return Err(format!("ElevenLabs error {}: {}", status, error_text));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read ElevenLabs audio: {}", e))?
            .to_vec();

        tracing::info!(
            provider = "elevenlabs",
            latency_ms = start_time.elapsed().as_millis() as u64,
            audio_size_bytes = audio.len(),
            "Speech synthesis completed"
        );

        Ok(audio)
    }
}

use super::dto::{SynthesizedAudio, UploadedAudio, VoiceChatResponse, VoiceGenerateRequest};
use super::{
    SpeechRepository, SpeechRequest, TranscriptionRepository, VoiceServiceError, VoiceStyle, DEFAULT_SPEED,
    MAX_TEXT_CHARS, SPEED_RANGE,
};
use crate::domain::generation::GenerationResult;
use crate::domain::murshid::MurshidServiceApi;
use crate::domain::shared::LanguageCode;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use std::time::Instant;

fn validate_speed(speed: Option<f64>) -> Result<f64, VoiceServiceError> {
    let speed = speed.unwrap_or(DEFAULT_SPEED);
    if SPEED_RANGE.contains(&speed) {
        Ok(speed)
    } else {
        Err(VoiceServiceError::Invalid(
            "Speed must be between 0.5 and 1.5".to_string(),
        ))
    }
}

fn validate_text(text: &str) -> Result<(), VoiceServiceError> {
    let length = text.chars().count();
    if length == 0 || length > MAX_TEXT_CHARS {
        return Err(VoiceServiceError::Invalid(format!(
            "Text must be between 1 and {} characters",
            MAX_TEXT_CHARS
        )));
    }
    Ok(())
}

/// `voice_en_speed0.85.mp3`; whole speeds keep one decimal
pub fn download_filename(language: LanguageCode, speed: f64) -> String {
    format!("voice_{}_speed{:?}.mp3", language, speed)
}

pub struct VoiceService {
    speech_repo: Arc<dyn SpeechRepository>,
    transcription_repo: Arc<dyn TranscriptionRepository>,
    murshid: Arc<dyn MurshidServiceApi>,
}

impl VoiceService {
    pub fn new(
        speech_repo: Arc<dyn SpeechRepository>,
        transcription_repo: Arc<dyn TranscriptionRepository>,
        murshid: Arc<dyn MurshidServiceApi>,
    ) -> Self {
        Self {
            speech_repo,
            transcription_repo,
            murshid,
        }
    }

    async fn synthesize(&self, request: SpeechRequest) -> Result<Vec<u8>, VoiceServiceError> {
        let start = Instant::now();
        let audio = self.speech_repo.synthesize(&request).await.map_err(|e| {
            tracing::error!(error = %e, language = %request.language, "Speech synthesis failed");
            VoiceServiceError::Synthesis(e)
        })?;

        tracing::info!(
            style = %request.style,
            language = %request.language,
            speed = request.speed,
            text_length = request.text.chars().count(),
            audio_size = audio.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Speech synthesized"
        );

        Ok(audio)
    }
}

#[async_trait]
pub trait VoiceServiceApi: Send + Sync {
    /// Text to a downloadable MP3
    async fn generate(
        &self,
        request: VoiceGenerateRequest,
        speed: Option<f64>,
    ) -> Result<SynthesizedAudio, VoiceServiceError>;

    /// Transcribe, answer as the Murshid, then speak the answer.
    ///
    /// Any failing step aborts the whole flow; a canned chat answer counts as a failure.
    async fn chat(
        &self,
        audio: UploadedAudio,
        language: LanguageCode,
        speed: Option<f64>,
    ) -> Result<VoiceChatResponse, VoiceServiceError>;
}

#[async_trait]
impl VoiceServiceApi for VoiceService {
    async fn generate(
        &self,
        request: VoiceGenerateRequest,
        speed: Option<f64>,
    ) -> Result<SynthesizedAudio, VoiceServiceError> {
        validate_text(&request.text)?;
        let speed = validate_speed(speed)?;

        let language = request.language;
        let bytes = self
            .synthesize(SpeechRequest {
                text: request.text,
                style: request.voice_style,
                language,
                speed,
            })
            .await?;

        Ok(SynthesizedAudio {
            bytes,
            filename: download_filename(language, speed),
        })
    }

    async fn chat(
        &self,
        audio: UploadedAudio,
        language: LanguageCode,
        speed: Option<f64>,
    ) -> Result<VoiceChatResponse, VoiceServiceError> {
        let speed = validate_speed(speed)?;
        if audio.bytes.is_empty() {
            return Err(VoiceServiceError::Invalid("Audio file is empty".to_string()));
        }

        let filename = audio.transcription_filename();
        tracing::info!(
            filename = audio.filename.as_deref().unwrap_or("unnamed"),
            audio_size = audio.bytes.len(),
            "Voice chat upload received"
        );

        let user_message = self
            .transcription_repo
            .transcribe(&filename, audio.bytes)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Transcription failed");
                VoiceServiceError::Transcription(e)
            })?;

        tracing::info!(transcript_length = user_message.chars().count(), "Audio transcribed");

        let (ai_response, tokens_used) = match self.murshid.reply(user_message.clone(), language).await {
            GenerationResult::Generated { text, tokens_used } => (text, tokens_used),
            GenerationResult::Degraded { .. } => {
                tracing::error!(language = %language, "Chat generation degraded during voice chat");
                return Err(VoiceServiceError::Generation);
            }
        };

        let audio = self
            .synthesize(SpeechRequest {
                text: ai_response.clone(),
                style: VoiceStyle::Calm,
                language,
                speed,
            })
            .await?;

        let audio_base64 = STANDARD.encode(&audio);

        Ok(VoiceChatResponse {
            user_message,
            ai_response,
            download_url: format!("data:audio/mpeg;base64,{}", audio_base64),
            audio_base64,
            language,
            speed,
            tokens_used,
            success: true,
        })
    }
}

use super::VoiceStyle;
use crate::domain::shared::LanguageCode;
use serde::{Deserialize, Serialize};

/// Request for POST /api/voice/generate
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceGenerateRequest {
    pub text: String,
    #[serde(default)]
    pub language: LanguageCode,
    #[serde(default)]
    pub voice_style: VoiceStyle,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SpeedQuery {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct VoiceChatQuery {
    #[serde(default)]
    pub language: LanguageCode,
    pub response_speed: Option<f64>,
}

/// Audio file uploaded for voice chat
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedAudio {
    /// Name sent to the transcriber; only the extension matters to it
    pub fn transcription_filename(&self) -> String {
        let extension = self
            .filename
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.trim())
            .filter(|ext| !ext.is_empty())
            .unwrap_or("mp3");
        format!("audio.{}", extension.to_lowercase())
    }
}

/// MP3 ready to be returned as a download
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceChatResponse {
    pub user_message: String,
    pub ai_response: String,
    pub audio_base64: String,
    pub download_url: String,
    pub language: LanguageCode,
    pub speed: f64,
    pub tokens_used: Option<u32>,
    pub success: bool,
}

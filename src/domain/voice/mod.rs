pub mod dto;
pub mod error;
pub mod service;

pub use error::VoiceServiceError;
pub use service::{VoiceService, VoiceServiceApi};

use crate::domain::shared::LanguageCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_SPEED: f64 = 0.85;
pub const SPEED_RANGE: RangeInclusive<f64> = 0.5..=1.5;
pub const MAX_TEXT_CHARS: usize = 5000;
pub const SPEECH_MODEL: &str = "eleven_multilingual_v2";

const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceStyle {
    #[default]
    Calm,
    Wise,
    Gentle,
}

impl VoiceStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceStyle::Calm => "calm",
            VoiceStyle::Wise => "wise",
            VoiceStyle::Gentle => "gentle",
        }
    }

    /// Provider voice; all styles currently share one voice
    pub fn voice_id(&self) -> &'static str {
        match self {
            VoiceStyle::Calm | VoiceStyle::Wise | VoiceStyle::Gentle => DEFAULT_VOICE_ID,
        }
    }
}

impl std::fmt::Display for VoiceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesis tuning sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    pub style: f64,
    pub use_speaker_boost: bool,
    pub speed: f64,
}

impl VoiceSettings {
    /// Slow speech gets more stability; Arabic and Urdu get a more formal delivery
    pub fn for_speech(speed: f64, language: LanguageCode) -> Self {
        Self {
            stability: if speed < 1.0 { 0.75 } else { 0.60 },
            similarity_boost: 0.75,
            style: if language.prefers_formal_voice() { 0.3 } else { 0.5 },
            use_speaker_boost: true,
            speed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub style: VoiceStyle,
    pub language: LanguageCode,
    pub speed: f64,
}

impl SpeechRequest {
    pub fn settings(&self) -> VoiceSettings {
        VoiceSettings::for_speech(self.speed, self.language)
    }
}

/// Text-to-speech provider returning MP3 bytes
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, String>;
}

/// Speech-to-text provider
#[async_trait]
pub trait TranscriptionRepository: Send + Sync {
    async fn transcribe(&self, filename: &str, audio: Vec<u8>) -> Result<String, String>;
}

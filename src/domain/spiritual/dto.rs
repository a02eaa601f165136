use crate::domain::shared::LanguageCode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MEDITATION_MINUTES: i64 = 5;

fn default_level() -> Option<String> {
    Some("beginner".to_string())
}

fn default_duration() -> i64 {
    DEFAULT_MEDITATION_MINUTES
}

/// Request for POST /api/spiritual/advice
#[derive(Debug, Clone, Deserialize)]
pub struct SpiritualAdviceRequest {
    pub topic: String,
    #[serde(default = "default_level")]
    pub user_level: Option<String>,
    #[serde(default)]
    pub language: LanguageCode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpiritualAdviceResponse {
    pub advice: String,
    pub recommended_zikr: Vec<String>,
    pub next_steps: Vec<String>,
    pub language: LanguageCode,
}

/// Request for POST /api/spiritual/meditation
#[derive(Debug, Clone, Deserialize)]
pub struct MeditationRequest {
    pub goal: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: i64,
    #[serde(default)]
    pub language: LanguageCode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeditationResponse {
    pub script: String,
    pub audio_url: Option<String>,
    pub duration_minutes: u32,
    pub steps: Vec<String>,
    pub language: LanguageCode,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZikrQuery {
    pub mood: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZikrResponse {
    pub mood: String,
    pub zikr_suggestions: Vec<String>,
    pub language: LanguageCode,
    pub note: String,
}

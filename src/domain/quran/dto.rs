use crate::domain::content::ContentRecord;
use crate::domain::generation::GenerationResult;
use crate::domain::shared::LanguageCode;
use serde::{Deserialize, Serialize};

/// Request for POST /api/quran/explain
#[derive(Debug, Clone, Deserialize)]
pub struct QuranExplainRequest {
    pub surah_number: i64,
    #[serde(default)]
    pub ayah_number: Option<i64>,
    #[serde(default)]
    pub language: LanguageCode,
}

/// Response for POST /api/quran/explain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuranExplainResponse {
    pub surah_number: u32,
    pub surah_name: String,
    pub ayah_number: Option<u32>,
    pub arabic_text: String,
    pub translation: String,
    pub explanation: String,
    pub language: LanguageCode,
}

impl QuranExplainResponse {
    pub fn assemble(
        record: ContentRecord,
        explanation: GenerationResult,
        surah_name: String,
        language: LanguageCode,
    ) -> Self {
        Self {
            surah_number: record.meta_u32("surah_number").unwrap_or_default(),
            surah_name,
            ayah_number: record.meta_u32("ayah_number"),
            arabic_text: record.primary_text,
            translation: record.translated_text,
            explanation: explanation.into_text(),
            language,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<serde_json::Value>,
}

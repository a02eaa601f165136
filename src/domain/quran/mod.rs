pub mod dto;
pub mod service;
pub mod text;

pub use service::{QuranService, QuranServiceApi};
pub use text::strip_markup;

use crate::domain::content::FetchError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const SURAH_COUNT: u32 = 114;

/// Chapter metadata as published by the Quran API
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    pub id: u32,
    #[serde(default)]
    pub name_simple: String,
    #[serde(default)]
    pub name_complex: String,
    #[serde(default)]
    pub name_arabic: String,
    #[serde(default)]
    pub revelation_place: String,
    #[serde(default)]
    pub verses_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_name: Option<TranslatedName>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TranslatedName {
    #[serde(default)]
    pub language_name: String,
    #[serde(default)]
    pub name: String,
}

#[async_trait]
pub trait QuranRepository: Send + Sync {
    /// Uthmani Arabic text of `surah:ayah`
    async fn fetch_arabic(&self, surah: u32, ayah: u32) -> Result<String, FetchError>;

    /// First translation of `surah:ayah` for the given translation resource, markup included
    async fn fetch_translation(&self, surah: u32, ayah: u32, translation_id: u32) -> Result<String, FetchError>;

    async fn fetch_chapter(&self, surah: u32) -> Result<Chapter, FetchError>;

    /// Raw search hits, passed through to clients
    async fn search(&self, query: &str, size: u32) -> Result<Vec<serde_json::Value>, FetchError>;
}

use super::http_client::get_json;
use crate::domain::content::FetchError;
use crate::domain::quran::{Chapter, QuranRepository};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const PROVIDER: &str = "quran.com";

#[derive(Debug, Deserialize)]
struct VerseEnvelope {
    verse: VersePayload,
}

#[derive(Debug, Default, Deserialize)]
struct VersePayload {
    #[serde(default)]
    text_uthmani: String,
    #[serde(default)]
    translations: Vec<TranslationPayload>,
}

#[derive(Debug, Deserialize)]
struct TranslationPayload {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ChapterEnvelope {
    chapter: Chapter,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    search: SearchPayload,
}

#[derive(Debug, Default, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

/// quran.com v4 API
pub struct QuranApiRepository {
    client: Client,
    base_url: String,
}

impl QuranApiRepository {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_verse(&self, surah: u32, ayah: u32, query: &[(&str, String)]) -> Result<VersePayload, FetchError> {
        let url = format!("{}/verses/by_key/{}:{}", self.base_url, surah, ayah);
        let envelope: VerseEnvelope = get_json(&self.client, PROVIDER, &url, query).await?;
        Ok(envelope.verse)
    }
}

#[async_trait]
impl QuranRepository for QuranApiRepository {
    async fn fetch_arabic(&self, surah: u32, ayah: u32) -> Result<String, FetchError> {
        let verse = self
            .fetch_verse(surah, ayah, &[("fields", "text_uthmani".to_string())])
            .await?;
        Ok(verse.text_uthmani)
    }

    async fn fetch_translation(&self, surah: u32, ayah: u32, translation_id: u32) -> Result<String, FetchError> {
        let verse = self
            .fetch_verse(
                surah,
                ayah,
                &[
                    ("translations", translation_id.to_string()),
                    ("fields", "text_uthmani".to_string()),
                ],
            )
            .await?;

        Ok(verse
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .unwrap_or_default())
    }

    async fn fetch_chapter(&self, surah: u32) -> Result<Chapter, FetchError> {
        let url = format!("{}/chapters/{}", self.base_url, surah);
        let envelope: ChapterEnvelope = get_json(&self.client, PROVIDER, &url, &[]).await?;
        Ok(envelope.chapter)
    }

    async fn search(&self, query: &str, size: u32) -> Result<Vec<serde_json::Value>, FetchError> {
        let url = format!("{}/search", self.base_url);
        let envelope: SearchEnvelope = get_json(
            &self.client,
            PROVIDER,
            &url,
            &[("q", query.to_string()), ("size", size.to_string())],
        )
        .await?;
        Ok(envelope.search.results)
    }
}

use super::dto::{QuranExplainRequest, QuranExplainResponse, SearchResponse};
use super::{strip_markup, Chapter, QuranRepository, SURAH_COUNT};
use crate::domain::content::{ContentRecord, ContentRequest, ContentServiceError, FetchError, Locator};
use crate::domain::generation::{GenerationPrompt, GenerationServiceApi};
use async_trait::async_trait;
use std::sync::Arc;

const SEARCH_PAGE_SIZE: u32 = 10;

pub struct QuranService {
    quran_repo: Arc<dyn QuranRepository>,
    generation: Arc<dyn GenerationServiceApi>,
}

impl QuranService {
    pub fn new(quran_repo: Arc<dyn QuranRepository>, generation: Arc<dyn GenerationServiceApi>) -> Self {
        Self {
            quran_repo,
            generation,
        }
    }

    /// Chapter name for display; lookup failures fall back to "Surah N"
    async fn surah_name(&self, surah: u32) -> String {
        match self.quran_repo.fetch_chapter(surah).await {
            Ok(chapter) if !chapter.name_simple.is_empty() => chapter.name_simple,
            Ok(_) => format!("Surah {}", surah),
            Err(e) => {
                tracing::warn!(surah, error = %e, "Surah info unavailable, using generic name");
                format!("Surah {}", surah)
            }
        }
    }
}

fn validate_surah(surah: i64) -> Result<u32, ContentServiceError> {
    if (1..=i64::from(SURAH_COUNT)).contains(&surah) {
        Ok(surah as u32)
    } else {
        Err(ContentServiceError::Invalid("Invalid Surah number (1-114)".to_string()))
    }
}

fn validate_ayah(ayah: Option<i64>) -> Result<u32, ContentServiceError> {
    match ayah {
        None => Ok(1),
        Some(n) if n >= 1 && n <= i64::from(u32::MAX) => Ok(n as u32),
        Some(_) => Err(ContentServiceError::Invalid("Invalid Ayah number (must be 1 or greater)".to_string())),
    }
}

fn verse_error(err: FetchError) -> ContentServiceError {
    match err {
        FetchError::NotFound(_) => ContentServiceError::NotFound("Verse not found".to_string()),
        FetchError::Transport(detail) => ContentServiceError::Dependency(detail),
    }
}

#[async_trait]
pub trait QuranServiceApi: Send + Sync {
    /// Arabic text and translation of one verse
    async fn fetch(&self, request: &ContentRequest) -> Result<ContentRecord, ContentServiceError>;

    async fn explain(&self, request: QuranExplainRequest) -> Result<QuranExplainResponse, ContentServiceError>;

    async fn surah(&self, surah_number: i64) -> Result<Chapter, ContentServiceError>;

    async fn search(&self, query: String) -> Result<SearchResponse, ContentServiceError>;
}

#[async_trait]
impl QuranServiceApi for QuranService {
    async fn fetch(&self, request: &ContentRequest) -> Result<ContentRecord, ContentServiceError> {
        tracing::debug!(source = ?request.source(), language = %request.language(), "Fetching content");
        let (surah, ayah) = match request.locator() {
            Locator::Verse { surah, ayah } => (*surah, *ayah),
            Locator::Book { .. } => {
                return Err(ContentServiceError::Invalid(
                    "Quran lookups need a surah and ayah".to_string(),
                ))
            }
        };
        let translation = request.language().translation_id();

        // Resource 0 is the Arabic original; there is no translation to fetch
        let (arabic, translated) = if translation == 0 {
            let arabic = self.quran_repo.fetch_arabic(surah, ayah).await.map_err(verse_error)?;
            (arabic, String::new())
        } else {
            let (arabic, translated) = tokio::try_join!(
                self.quran_repo.fetch_arabic(surah, ayah),
                self.quran_repo.fetch_translation(surah, ayah, translation),
            )
            .map_err(verse_error)?;
            (arabic, strip_markup(&translated))
        };

        if arabic.trim().is_empty() {
            tracing::warn!(surah, ayah, "Verse has no Arabic text");
            return Err(ContentServiceError::NotFound("Verse not found".to_string()));
        }

        Ok(ContentRecord::new(arabic, translated)
            .with_meta("surah_number", surah)
            .with_meta("ayah_number", ayah)
            .with_meta("verse_key", format!("{}:{}", surah, ayah))
            .with_meta("translation_id", translation))
    }

    async fn explain(&self, request: QuranExplainRequest) -> Result<QuranExplainResponse, ContentServiceError> {
        let surah = validate_surah(request.surah_number)?;
        let ayah = validate_ayah(request.ayah_number)?;

        tracing::info!(surah, ayah, language = %request.language, "Quran explain request");

        let content_request = ContentRequest::verse(surah, ayah, request.language);
        let record = self.fetch(&content_request).await?;

        let explanation = self
            .generation
            .generate(
                GenerationPrompt::QuranExplanation {
                    verse: record.primary_text.clone(),
                    translation: record.translated_text.clone(),
                },
                content_request.language(),
            )
            .await;

        let surah_name = self.surah_name(surah).await;

        Ok(QuranExplainResponse::assemble(
            record,
            explanation,
            surah_name,
            content_request.language(),
        ))
    }

    async fn surah(&self, surah_number: i64) -> Result<Chapter, ContentServiceError> {
        let surah = validate_surah(surah_number)?;

        self.quran_repo.fetch_chapter(surah).await.map_err(|e| match e {
            FetchError::NotFound(_) => ContentServiceError::NotFound("Surah not found".to_string()),
            FetchError::Transport(detail) => ContentServiceError::Dependency(detail),
        })
    }

    async fn search(&self, query: String) -> Result<SearchResponse, ContentServiceError> {
        let results = self
            .quran_repo
            .search(&query, SEARCH_PAGE_SIZE)
            .await
            .map_err(|e| {
                tracing::error!(query = %query, error = %e, "Quran search failed");
                ContentServiceError::Dependency("Search failed".to_string())
            })?;

        tracing::info!(query = %query, results = results.len(), "Quran search completed");

        Ok(SearchResponse { query, results })
    }
}

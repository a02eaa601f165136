use super::collections::{CollectionSummary, COLLECTIONS};
use super::dto::{CollectionsResponse, HadithDto, HadithExplainRequest, HadithExplainResponse, RandomHadithResponse};
use super::{resolve, HadithRepository};
use crate::domain::content::{ContentRecord, ContentRequest, ContentServiceError, Locator};
use crate::domain::generation::{GenerationPrompt, GenerationResult, GenerationServiceApi};
use crate::domain::shared::LanguageCode;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Random picks stay within the first books of a collection
const RANDOM_BOOK_CEILING: u32 = 10;

pub struct HadithService {
    hadith_repo: Arc<dyn HadithRepository>,
    generation: Arc<dyn GenerationServiceApi>,
}

impl HadithService {
    pub fn new(hadith_repo: Arc<dyn HadithRepository>, generation: Arc<dyn GenerationServiceApi>) -> Self {
        Self {
            hadith_repo,
            generation,
        }
    }

    async fn explain_record(&self, record: &ContentRecord, language: LanguageCode) -> GenerationResult {
        self.generation
            .generate(
                GenerationPrompt::HadithExplanation {
                    hadith_text: record.translated_text.clone(),
                },
                language,
            )
            .await
    }
}

#[async_trait]
pub trait HadithServiceApi: Send + Sync {
    /// Resolve a book locator to its first hadith
    async fn fetch(&self, request: &ContentRequest) -> Result<ContentRecord, ContentServiceError>;

    /// Fetch a hadith and explain it
    async fn explain(&self, request: HadithExplainRequest) -> Result<HadithExplainResponse, ContentServiceError>;

    /// Explain the first hadith of a random early book of a random collection
    async fn random(&self, language: LanguageCode) -> Result<RandomHadithResponse, ContentServiceError>;

    fn collections(&self) -> CollectionsResponse;
}

#[async_trait]
impl HadithServiceApi for HadithService {
    async fn fetch(&self, request: &ContentRequest) -> Result<ContentRecord, ContentServiceError> {
        tracing::debug!(source = ?request.source(), language = %request.language(), "Fetching content");
        match request.locator() {
            Locator::Book { collection, book } => resolve(self.hadith_repo.as_ref(), collection, *book).await,
            Locator::Verse { .. } => Err(ContentServiceError::Invalid(
                "Hadith lookups need a collection and book".to_string(),
            )),
        }
    }

    async fn explain(&self, request: HadithExplainRequest) -> Result<HadithExplainResponse, ContentServiceError> {
        tracing::info!(
            collection = %request.collection,
            book_number = request.book_number,
            language = %request.language,
            "Hadith explain request"
        );

        let content_request =
            ContentRequest::hadith_book(request.collection, request.book_number, request.language);
        let record = self.fetch(&content_request).await?;

        let explanation = self.explain_record(&record, content_request.language()).await;

        Ok(HadithExplainResponse::assemble(
            record,
            explanation,
            content_request.language(),
        ))
    }

    async fn random(&self, language: LanguageCode) -> Result<RandomHadithResponse, ContentServiceError> {
        let (collection, book) = {
            let mut rng = rand::thread_rng();
            let collection = COLLECTIONS
                .choose(&mut rng)
                .ok_or_else(|| ContentServiceError::Other(anyhow::anyhow!("no hadith collections configured")))?;
            let book = rng.gen_range(1..=RANDOM_BOOK_CEILING.min(collection.books));
            (collection, book)
        };

        tracing::info!(collection = collection.id, book, "Random hadith pick");

        let record = self
            .fetch(&ContentRequest::hadith_book(collection.id, i64::from(book), language))
            .await
            .map_err(|e| match e {
                ContentServiceError::NotFound(_) => {
                    ContentServiceError::NotFound("Could not fetch hadith".to_string())
                }
                other => other,
            })?;

        let explanation = self.explain_record(&record, language).await.into_text();

        Ok(RandomHadithResponse {
            hadith: HadithDto::from(record),
            explanation,
            language,
        })
    }

    fn collections(&self) -> CollectionsResponse {
        CollectionsResponse {
            collections: COLLECTIONS.iter().map(CollectionSummary::from).collect(),
        }
    }
}

use super::CollectionSummary;
use crate::domain::content::ContentRecord;
use crate::domain::generation::GenerationResult;
use crate::domain::shared::LanguageCode;
use serde::{Deserialize, Serialize};

/// Request for POST /api/hadith/explain
#[derive(Debug, Clone, Deserialize)]
pub struct HadithExplainRequest {
    pub collection: String,
    pub book_number: i64,
    #[serde(default)]
    pub language: LanguageCode,
}

/// Response for POST /api/hadith/explain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HadithExplainResponse {
    pub collection: String,
    pub book_number: u32,
    pub hadith_number: Option<u32>,
    pub arabic_text: Option<String>,
    pub translation: String,
    pub explanation: String,
    pub authenticity: Option<String>,
    pub language: LanguageCode,
}

impl HadithExplainResponse {
    pub fn assemble(record: ContentRecord, explanation: GenerationResult, language: LanguageCode) -> Self {
        let hadith = HadithDto::from(record);
        Self {
            collection: hadith.collection,
            book_number: hadith.book_number,
            hadith_number: hadith.hadith_number,
            arabic_text: Some(hadith.arabic),
            translation: hadith.text,
            explanation: explanation.into_text(),
            authenticity: Some("Sahih".to_string()),
            language,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HadithReferenceDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hadith: Option<u32>,
}

/// Hadith as returned by GET /api/hadith/random
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HadithDto {
    pub collection: String,
    pub book_number: u32,
    pub hadith_number: Option<u32>,
    pub text: String,
    pub arabic: String,
    pub reference: HadithReferenceDto,
}

impl From<ContentRecord> for HadithDto {
    fn from(record: ContentRecord) -> Self {
        Self {
            collection: record.meta("collection").unwrap_or_default().to_string(),
            book_number: record.meta_u32("book_number").unwrap_or(1),
            hadith_number: record.meta_u32("hadith_number"),
            reference: HadithReferenceDto {
                book: record.meta_u32("reference_book"),
                hadith: record.meta_u32("reference_hadith"),
            },
            text: record.translated_text,
            arabic: record.primary_text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RandomHadithResponse {
    pub hadith: HadithDto,
    pub explanation: String,
    pub language: LanguageCode,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionsResponse {
    pub collections: Vec<CollectionSummary>,
}

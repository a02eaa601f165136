pub mod collections;
pub mod dto;
pub mod resolver;
pub mod service;

pub use collections::{find_collection, CollectionSummary, HadithCollection, COLLECTIONS};
pub use resolver::{resolve, EditionCandidate};
pub use service::{HadithService, HadithServiceApi};

use crate::domain::content::FetchError;
use async_trait::async_trait;
use serde::Deserialize;

/// One book of a hadith edition as published by the hadith API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HadithEdition {
    #[serde(default)]
    pub hadiths: Vec<HadithEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HadithEntry {
    #[serde(default)]
    pub hadithnumber: Option<f64>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub arabic: String,
    #[serde(default)]
    pub reference: Option<HadithReference>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HadithReference {
    #[serde(default)]
    pub book: Option<f64>,
    #[serde(default)]
    pub hadith: Option<f64>,
}

/// Access to hadith editions, one book at a time
#[async_trait]
pub trait HadithRepository: Send + Sync {
    /// Fetch `editions/{edition}/{book}.json`
    async fn fetch_edition(&self, edition: &str, book: u32) -> Result<HadithEdition, FetchError>;
}

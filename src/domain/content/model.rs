use crate::domain::shared::LanguageCode;
use serde::Serialize;
use std::collections::BTreeMap;

/// Which provider family a request is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Quran,
    Hadith,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Verse { surah: u32, ayah: u32 },
    Book { collection: String, book: i64 },
}

/// A single inbound lookup, built once per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    locator: Locator,
    language: LanguageCode,
}

impl ContentRequest {
    pub fn verse(surah: u32, ayah: u32, language: LanguageCode) -> Self {
        Self {
            locator: Locator::Verse { surah, ayah },
            language,
        }
    }

    pub fn hadith_book(collection: impl Into<String>, book: i64, language: LanguageCode) -> Self {
        Self {
            locator: Locator::Book {
                collection: collection.into(),
                book,
            },
            language,
        }
    }

    pub fn source(&self) -> ContentSource {
        match self.locator {
            Locator::Verse { .. } => ContentSource::Quran,
            Locator::Book { .. } => ContentSource::Hadith,
        }
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }
}

/// Provider output normalized into one shape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRecord {
    pub primary_text: String,
    pub translated_text: String,
    pub metadata: BTreeMap<String, String>,
}

impl ContentRecord {
    pub fn new(primary_text: impl Into<String>, translated_text: impl Into<String>) -> Self {
        Self {
            primary_text: primary_text.into(),
            translated_text: translated_text.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_meta(mut self, key: &str, value: impl ToString) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn meta_u32(&self, key: &str) -> Option<u32> {
        self.meta(key).and_then(|v| v.parse().ok())
    }
}

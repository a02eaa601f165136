use super::collections::{find_collection, HadithCollection};
use super::{HadithEntry, HadithRepository};
use crate::domain::content::{ContentRecord, ContentServiceError, FallbackPlan, FetchError};
use std::fmt;

/// One edition/book request shape tried by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionCandidate {
    pub edition: String,
    pub book: u32,
}

impl fmt::Display for EditionCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "editions/{}/{}", self.edition, self.book)
    }
}

/// Out-of-range books are reset to 1 instead of being rejected
pub fn clamp_book(collection: &HadithCollection, book_number: i64) -> u32 {
    if book_number < 1 || book_number > i64::from(collection.books) {
        tracing::warn!(
            collection = collection.id,
            book_number,
            max_books = collection.books,
            "Book number out of range, using book 1"
        );
        1
    } else {
        book_number as u32
    }
}

/// Canonical prefix, bare collection id, then "eng-" + id
pub fn build_plan(collection: &HadithCollection, book: u32) -> FallbackPlan<EditionCandidate> {
    let candidate = |edition: String| EditionCandidate { edition, book };

    FallbackPlan::new(
        candidate(collection.edition_prefix.to_string()),
        [
            candidate(collection.id.to_string()),
            candidate(format!("eng-{}", collection.id)),
        ],
    )
}

/// Resolve the first hadith of `book_number` in `collection`.
///
/// Unknown collections fail fast without touching the provider.
pub async fn resolve(
    repo: &dyn HadithRepository,
    collection: &str,
    book_number: i64,
) -> Result<ContentRecord, ContentServiceError> {
    let info = find_collection(collection).ok_or_else(|| {
        tracing::error!(collection = %collection, "Invalid hadith collection");
        ContentServiceError::Invalid(format!("Invalid collection: {}", collection))
    })?;

    let book = clamp_book(info, book_number);
    let plan = build_plan(info, book);

    let entry = plan
        .resolve_first(|candidate| async move {
            let edition = repo.fetch_edition(&candidate.edition, candidate.book).await?;
            Ok::<_, FetchError>(edition.hadiths.into_iter().next())
        })
        .await
        .map_err(|_| {
            tracing::error!(collection = info.id, book, "All edition formats failed");
            ContentServiceError::NotFound("Hadith not found".to_string())
        })?;

    Ok(normalize(info, book, entry))
}

fn normalize(collection: &HadithCollection, book: u32, entry: HadithEntry) -> ContentRecord {
    let mut record = ContentRecord::new(entry.arabic, entry.text)
        .with_meta("collection", collection.name)
        .with_meta("collection_id", collection.id)
        .with_meta("book_number", book)
        .with_meta(
            "hadith_number",
            format_number(entry.hadithnumber.unwrap_or(1.0)),
        );

    if let Some(reference) = entry.reference {
        if let Some(ref_book) = reference.book {
            record = record.with_meta("reference_book", format_number(ref_book));
        }
        if let Some(ref_hadith) = reference.hadith {
            record = record.with_meta("reference_hadith", format_number(ref_hadith));
        }
    }

    record
}

/// Whole numbers print without a fractional part
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

use serde::Serialize;

/// A hadith corpus served by the hadith API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HadithCollection {
    pub id: &'static str,
    pub name: &'static str,
    pub edition_prefix: &'static str,
    pub books: u32,
}

pub const COLLECTIONS: &[HadithCollection] = &[
    HadithCollection {
        id: "bukhari",
        name: "Sahih Bukhari",
        edition_prefix: "eng-bukhari",
        books: 97,
    },
    HadithCollection {
        id: "muslim",
        name: "Sahih Muslim",
        edition_prefix: "eng-muslim",
        books: 56,
    },
    HadithCollection {
        id: "abudawud",
        name: "Sunan Abu Dawud",
        edition_prefix: "eng-abudawud",
        books: 43,
    },
    HadithCollection {
        id: "tirmidhi",
        name: "Jami At-Tirmidhi",
        edition_prefix: "eng-tirmidhi",
        books: 51,
    },
    HadithCollection {
        id: "nasai",
        name: "Sunan an-Nasa'i",
        edition_prefix: "eng-nasai",
        books: 51,
    },
    HadithCollection {
        id: "ibnmajah",
        name: "Sunan Ibn Majah",
        edition_prefix: "eng-ibnmajah",
        books: 37,
    },
];

/// Case-insensitive lookup by collection id
pub fn find_collection(id: &str) -> Option<&'static HadithCollection> {
    let id = id.trim().to_lowercase();
    COLLECTIONS.iter().find(|c| c.id == id)
}

/// Entry of GET /api/hadith/collections
#[derive(Debug, Clone, Serialize)]
pub struct CollectionSummary {
    pub id: String,
    pub name: String,
    pub total_books: u32,
}

impl From<&HadithCollection> for CollectionSummary {
    fn from(collection: &HadithCollection) -> Self {
        Self {
            id: collection.id.to_string(),
            name: collection.name.to_string(),
            total_books: collection.books,
        }
    }
}

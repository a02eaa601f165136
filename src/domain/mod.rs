pub mod content;
pub mod generation;
pub mod hadith;
pub mod murshid;
pub mod prayer;
pub mod quran;
pub mod shared;
pub mod spiritual;
pub mod voice;

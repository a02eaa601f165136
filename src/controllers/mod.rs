pub mod hadith;
pub mod health;
pub mod murshid;
pub mod prayer;
pub mod quran;
pub mod spiritual;
pub mod voice;

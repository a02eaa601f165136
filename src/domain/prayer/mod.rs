pub mod dto;
pub mod service;

pub use service::{PrayerService, PrayerServiceApi};

use crate::domain::content::FetchError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Calculation method passed to the prayer-times provider (ISNA)
pub const CALCULATION_METHOD: u8 = 2;

/// The six daily times, "HH:MM" in the location's local time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrayerTimings {
    pub fajr: Option<String>,
    pub sunrise: Option<String>,
    pub dhuhr: Option<String>,
    pub asr: Option<String>,
    pub maghrib: Option<String>,
    pub isha: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayTimings {
    pub date: Option<String>,
    pub hijri_date: Option<String>,
    pub timings: PrayerTimings,
}

#[async_trait]
pub trait PrayerTimesRepository: Send + Sync {
    async fn timings_by_city(&self, city: &str, country: &str) -> Result<DayTimings, FetchError>;

    async fn timings_by_coordinates(&self, latitude: f64, longitude: f64) -> Result<DayTimings, FetchError>;

    /// Direction of the Kaaba in degrees clockwise from north
    async fn qibla_direction(&self, latitude: f64, longitude: f64) -> Result<f64, FetchError>;
}

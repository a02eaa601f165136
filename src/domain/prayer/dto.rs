use super::PrayerTimings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CITY: &str = "Dhaka";
pub const DEFAULT_COUNTRY: &str = "Bangladesh";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
    pub country: Option<String>,
}

impl CityQuery {
    pub fn city(&self) -> &str {
        non_blank(self.city.as_deref()).unwrap_or(DEFAULT_CITY)
    }

    pub fn country(&self) -> &str {
        non_blank(self.country.as_deref()).unwrap_or(DEFAULT_COUNTRY)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordinatesQuery {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrayerTimesResponse {
    pub date: Option<String>,
    pub hijri_date: Option<String>,
    pub timings: PrayerTimings,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoordinatesPrayerTimesResponse {
    pub timings: PrayerTimings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QiblaResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub direction: f64,
}

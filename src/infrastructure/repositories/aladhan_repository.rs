use super::http_client::get_json;
use crate::domain::content::FetchError;
use crate::domain::prayer::{DayTimings, PrayerTimesRepository, PrayerTimings, CALCULATION_METHOD};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const PROVIDER: &str = "aladhan";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct TimingsPayload {
    #[serde(default)]
    timings: RawTimings,
    #[serde(default)]
    date: Option<DatePayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawTimings {
    fajr: Option<String>,
    sunrise: Option<String>,
    dhuhr: Option<String>,
    asr: Option<String>,
    maghrib: Option<String>,
    isha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DatePayload {
    readable: Option<String>,
    hijri: Option<HijriPayload>,
}

#[derive(Debug, Deserialize)]
struct HijriPayload {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QiblaPayload {
    direction: f64,
}

impl From<TimingsPayload> for DayTimings {
    fn from(payload: TimingsPayload) -> Self {
        let (date, hijri_date) = match payload.date {
            Some(date) => (date.readable, date.hijri.and_then(|h| h.date)),
            None => (None, None),
        };
        let raw = payload.timings;

        DayTimings {
            date,
            hijri_date,
            timings: PrayerTimings {
                fajr: raw.fajr,
                sunrise: raw.sunrise,
                dhuhr: raw.dhuhr,
                asr: raw.asr,
                maghrib: raw.maghrib,
                isha: raw.isha,
            },
        }
    }
}

/// aladhan.com prayer-times API
pub struct AladhanRepository {
    client: Client,
    base_url: String,
}

impl AladhanRepository {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PrayerTimesRepository for AladhanRepository {
    async fn timings_by_city(&self, city: &str, country: &str) -> Result<DayTimings, FetchError> {
        let url = format!("{}/timingsByCity", self.base_url);
        let envelope: Envelope<TimingsPayload> = get_json(
            &self.client,
            PROVIDER,
            &url,
            &[
                ("city", city.to_string()),
                ("country", country.to_string()),
                ("method", CALCULATION_METHOD.to_string()),
            ],
        )
        .await?;
        Ok(envelope.data.into())
    }

    async fn timings_by_coordinates(&self, latitude: f64, longitude: f64) -> Result<DayTimings, FetchError> {
        let url = format!("{}/timings", self.base_url);
        let envelope: Envelope<TimingsPayload> = get_json(
            &self.client,
            PROVIDER,
            &url,
            &[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("method", CALCULATION_METHOD.to_string()),
            ],
        )
        .await?;
        Ok(envelope.data.into())
    }

    async fn qibla_direction(&self, latitude: f64, longitude: f64) -> Result<f64, FetchError> {
        let url = format!("{}/qibla/{}/{}", self.base_url, latitude, longitude);
        let envelope: Envelope<QiblaPayload> = get_json(&self.client, PROVIDER, &url, &[]).await?;
        Ok(envelope.data.direction)
    }
}

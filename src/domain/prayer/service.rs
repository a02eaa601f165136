use super::dto::{CityQuery, CoordinatesPrayerTimesResponse, CoordinatesQuery, PrayerTimesResponse, QiblaResponse};
use super::PrayerTimesRepository;
use crate::domain::content::{ContentServiceError, FetchError};
use async_trait::async_trait;
use std::sync::Arc;

pub struct PrayerService {
    prayer_repo: Arc<dyn PrayerTimesRepository>,
}

impl PrayerService {
    pub fn new(prayer_repo: Arc<dyn PrayerTimesRepository>) -> Self {
        Self { prayer_repo }
    }
}

fn validate_coordinates(coordinates: CoordinatesQuery) -> Result<CoordinatesQuery, ContentServiceError> {
    if !(-90.0..=90.0).contains(&coordinates.latitude) {
        return Err(ContentServiceError::Invalid(
            "Latitude must be between -90 and 90".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&coordinates.longitude) {
        return Err(ContentServiceError::Invalid(
            "Longitude must be between -180 and 180".to_string(),
        ));
    }
    Ok(coordinates)
}

fn provider_error(context: &str, err: FetchError) -> ContentServiceError {
    tracing::error!(error = %err, "{}", context);
    ContentServiceError::Dependency(context.to_string())
}

#[async_trait]
pub trait PrayerServiceApi: Send + Sync {
    async fn times_by_city(&self, query: CityQuery) -> Result<PrayerTimesResponse, ContentServiceError>;

    async fn times_by_coordinates(
        &self,
        query: CoordinatesQuery,
    ) -> Result<CoordinatesPrayerTimesResponse, ContentServiceError>;

    async fn qibla(&self, query: CoordinatesQuery) -> Result<QiblaResponse, ContentServiceError>;
}

#[async_trait]
impl PrayerServiceApi for PrayerService {
    async fn times_by_city(&self, query: CityQuery) -> Result<PrayerTimesResponse, ContentServiceError> {
        let (city, country) = (query.city(), query.country());

        let day = self
            .prayer_repo
            .timings_by_city(city, country)
            .await
            .map_err(|e| provider_error("Could not fetch prayer times", e))?;

        Ok(PrayerTimesResponse {
            date: day.date,
            hijri_date: day.hijri_date,
            timings: day.timings,
            city: city.to_string(),
            country: country.to_string(),
        })
    }

    async fn times_by_coordinates(
        &self,
        query: CoordinatesQuery,
    ) -> Result<CoordinatesPrayerTimesResponse, ContentServiceError> {
        let query = validate_coordinates(query)?;

        let day = self
            .prayer_repo
            .timings_by_coordinates(query.latitude, query.longitude)
            .await
            .map_err(|e| provider_error("Could not fetch prayer times", e))?;

        Ok(CoordinatesPrayerTimesResponse { timings: day.timings })
    }

    async fn qibla(&self, query: CoordinatesQuery) -> Result<QiblaResponse, ContentServiceError> {
        let query = validate_coordinates(query)?;

        let direction = self
            .prayer_repo
            .qibla_direction(query.latitude, query.longitude)
            .await
            .map_err(|e| provider_error("Could not fetch Qibla direction", e))?;

        Ok(QiblaResponse {
            latitude: query.latitude,
            longitude: query.longitude,
            direction,
        })
    }
}

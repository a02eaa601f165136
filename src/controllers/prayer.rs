use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::prayer::{
        dto::{CityQuery, CoordinatesPrayerTimesResponse, CoordinatesQuery, PrayerTimesResponse, QiblaResponse},
        PrayerService, PrayerServiceApi,
    },
    error::AppResult,
    infrastructure::http::extract::AppQuery,
};

pub struct PrayerController {
    prayer_service: Arc<PrayerService>,
}

impl PrayerController {
    pub fn new(prayer_service: Arc<PrayerService>) -> Self {
        Self { prayer_service }
    }

    /// GET /api/prayer/times?city=&country=
    pub async fn times(
        State(controller): State<Arc<PrayerController>>,
        AppQuery(query): AppQuery<CityQuery>,
    ) -> AppResult<Json<PrayerTimesResponse>> {
        Ok(Json(controller.prayer_service.times_by_city(query).await?))
    }

    /// GET /api/prayer/times/coordinates?latitude=&longitude=
    pub async fn times_by_coordinates(
        State(controller): State<Arc<PrayerController>>,
        AppQuery(query): AppQuery<CoordinatesQuery>,
    ) -> AppResult<Json<CoordinatesPrayerTimesResponse>> {
        Ok(Json(controller.prayer_service.times_by_coordinates(query).await?))
    }

    /// GET /api/prayer/qibla?latitude=&longitude=
    pub async fn qibla(
        State(controller): State<Arc<PrayerController>>,
        AppQuery(query): AppQuery<CoordinatesQuery>,
    ) -> AppResult<Json<QiblaResponse>> {
        Ok(Json(controller.prayer_service.qibla(query).await?))
    }
}

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::spiritual::{
        dto::{
            MeditationRequest, MeditationResponse, SpiritualAdviceRequest, SpiritualAdviceResponse, ZikrQuery,
            ZikrResponse,
        },
        SpiritualService, SpiritualServiceApi,
    },
    error::AppResult,
    infrastructure::http::extract::{AppJson, AppQuery},
};

pub struct SpiritualController {
    spiritual_service: Arc<SpiritualService>,
}

impl SpiritualController {
    pub fn new(spiritual_service: Arc<SpiritualService>) -> Self {
        Self { spiritual_service }
    }

    /// POST /api/spiritual/advice
    pub async fn advice(
        State(controller): State<Arc<SpiritualController>>,
        AppJson(request): AppJson<SpiritualAdviceRequest>,
    ) -> Json<SpiritualAdviceResponse> {
        Json(controller.spiritual_service.advice(request).await)
    }

    /// POST /api/spiritual/meditation - Guided meditation script
    pub async fn meditation(
        State(controller): State<Arc<SpiritualController>>,
        AppJson(request): AppJson<MeditationRequest>,
    ) -> AppResult<Json<MeditationResponse>> {
        let response = controller.spiritual_service.meditation(request).await?;
        Ok(Json(response))
    }

    /// GET /api/spiritual/zikr-suggestions?mood=
    pub async fn zikr_suggestions(
        State(controller): State<Arc<SpiritualController>>,
        AppQuery(query): AppQuery<ZikrQuery>,
    ) -> Json<ZikrResponse> {
        Json(controller.spiritual_service.zikr_suggestions(query))
    }
}

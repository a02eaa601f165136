use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::{
        murshid::{
            dto::{ChatRequest, ChatResponse, DailyNaseehahResponse},
            MurshidService, MurshidServiceApi,
        },
        shared::LanguageQuery,
    },
    error::AppResult,
    infrastructure::http::extract::{AppJson, AppQuery},
};

pub struct MurshidController {
    murshid_service: Arc<MurshidService>,
}

impl MurshidController {
    pub fn new(murshid_service: Arc<MurshidService>) -> Self {
        Self { murshid_service }
    }

    /// POST /api/murshid/chat - Talk to the Murshid
    pub async fn chat(
        State(controller): State<Arc<MurshidController>>,
        AppJson(request): AppJson<ChatRequest>,
    ) -> AppResult<Json<ChatResponse>> {
        let response = controller.murshid_service.chat(request).await?;
        Ok(Json(response))
    }

    /// GET /api/murshid/daily-naseehah
    pub async fn daily_naseehah(
        State(controller): State<Arc<MurshidController>>,
        AppQuery(query): AppQuery<LanguageQuery>,
    ) -> Json<DailyNaseehahResponse> {
        Json(controller.murshid_service.daily_naseehah(query.language()).await)
    }
}

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::quran::{
        dto::{QuranExplainRequest, QuranExplainResponse, SearchQuery, SearchResponse},
        Chapter, QuranService, QuranServiceApi,
    },
    error::AppResult,
    infrastructure::http::extract::{AppJson, AppPath, AppQuery},
};

pub struct QuranController {
    quran_service: Arc<QuranService>,
}

impl QuranController {
    pub fn new(quran_service: Arc<QuranService>) -> Self {
        Self { quran_service }
    }

    /// POST /api/quran/explain - Verse with explanation
    pub async fn explain(
        State(controller): State<Arc<QuranController>>,
        AppJson(request): AppJson<QuranExplainRequest>,
    ) -> AppResult<Json<QuranExplainResponse>> {
        let response = controller.quran_service.explain(request).await?;
        Ok(Json(response))
    }

    /// GET /api/quran/surah/:surah_number
    pub async fn surah(
        State(controller): State<Arc<QuranController>>,
        AppPath(surah_number): AppPath<i64>,
    ) -> AppResult<Json<Chapter>> {
        let chapter = controller.quran_service.surah(surah_number).await?;
        Ok(Json(chapter))
    }

    /// GET /api/quran/search?query=
    pub async fn search(
        State(controller): State<Arc<QuranController>>,
        AppQuery(query): AppQuery<SearchQuery>,
    ) -> AppResult<Json<SearchResponse>> {
        tracing::debug!(
            query = %query.query,
            language = query.language.as_deref().unwrap_or("en"),
            "Quran search"
        );
        let response = controller.quran_service.search(query.query).await?;
        Ok(Json(response))
    }
}

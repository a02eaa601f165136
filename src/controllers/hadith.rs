use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::{
        hadith::{
            dto::{CollectionsResponse, HadithExplainRequest, HadithExplainResponse, RandomHadithResponse},
            HadithService, HadithServiceApi,
        },
        shared::LanguageQuery,
    },
    error::AppResult,
    infrastructure::http::extract::{AppJson, AppQuery},
};

pub struct HadithController {
    hadith_service: Arc<HadithService>,
}

impl HadithController {
    pub fn new(hadith_service: Arc<HadithService>) -> Self {
        Self { hadith_service }
    }

    /// POST /api/hadith/explain - Hadith with explanation
    pub async fn explain(
        State(controller): State<Arc<HadithController>>,
        AppJson(request): AppJson<HadithExplainRequest>,
    ) -> AppResult<Json<HadithExplainResponse>> {
        let response = controller.hadith_service.explain(request).await?;
        Ok(Json(response))
    }

    /// GET /api/hadith/random
    pub async fn random(
        State(controller): State<Arc<HadithController>>,
        AppQuery(query): AppQuery<LanguageQuery>,
    ) -> AppResult<Json<RandomHadithResponse>> {
        let response = controller.hadith_service.random(query.language()).await?;
        Ok(Json(response))
    }

    /// GET /api/hadith/collections
    pub async fn collections(State(controller): State<Arc<HadithController>>) -> Json<CollectionsResponse> {
        Json(controller.hadith_service.collections())
    }
}

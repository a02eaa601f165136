use super::dto::{
    MeditationRequest, MeditationResponse, SpiritualAdviceRequest, SpiritualAdviceResponse, ZikrQuery,
    ZikrResponse,
};
use super::zikr::{self, zikr_for, RECITATION_NOTE};
use crate::domain::content::ContentServiceError;
use crate::domain::generation::{GenerationPrompt, GenerationServiceApi};
use crate::domain::shared::LanguageCode;
use async_trait::async_trait;
use std::ops::RangeInclusive;
use std::sync::Arc;

pub const MEDITATION_MINUTES: RangeInclusive<i64> = 3..=30;

const NEXT_STEPS: &[&str] = &[
    "Maintain regular prayers",
    "Practice daily dhikr",
    "Read Quran with reflection",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Paragraphs of a script, blank-line separated
pub fn split_steps(script: &str) -> Vec<String> {
    script
        .split("\n\n")
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct SpiritualService {
    generation: Arc<dyn GenerationServiceApi>,
}

impl SpiritualService {
    pub fn new(generation: Arc<dyn GenerationServiceApi>) -> Self {
        Self { generation }
    }
}

#[async_trait]
pub trait SpiritualServiceApi: Send + Sync {
    async fn advice(&self, request: SpiritualAdviceRequest) -> SpiritualAdviceResponse;

    async fn meditation(&self, request: MeditationRequest) -> Result<MeditationResponse, ContentServiceError>;

    fn zikr_suggestions(&self, query: ZikrQuery) -> ZikrResponse;
}

#[async_trait]
impl SpiritualServiceApi for SpiritualService {
    async fn advice(&self, request: SpiritualAdviceRequest) -> SpiritualAdviceResponse {
        let user_level = request.user_level.unwrap_or_else(|| "beginner".to_string());
        tracing::info!(user_level = %user_level, language = %request.language, "Spiritual advice request");

        let result = self
            .generation
            .generate(
                GenerationPrompt::SpiritualAdvice {
                    topic: request.topic,
                    user_level,
                },
                request.language,
            )
            .await;

        let (recommended_zikr, next_steps) = if result.succeeded() {
            (owned(zikr::GENERAL), owned(NEXT_STEPS))
        } else {
            (Vec::new(), Vec::new())
        };

        SpiritualAdviceResponse {
            advice: result.into_text(),
            recommended_zikr,
            next_steps,
            language: request.language,
        }
    }

    async fn meditation(&self, request: MeditationRequest) -> Result<MeditationResponse, ContentServiceError> {
        if !MEDITATION_MINUTES.contains(&request.duration_minutes) {
            return Err(ContentServiceError::Invalid(
                "Duration must be between 3 and 30 minutes".to_string(),
            ));
        }
        let duration_minutes = request.duration_minutes as u32;

        let script = self
            .generation
            .generate(
                GenerationPrompt::Meditation {
                    goal: request.goal,
                    duration_minutes,
                },
                request.language,
            )
            .await
            .into_text();

        Ok(MeditationResponse {
            steps: split_steps(&script),
            script,
            audio_url: None,
            duration_minutes,
            language: request.language,
        })
    }

    fn zikr_suggestions(&self, query: ZikrQuery) -> ZikrResponse {
        let mood = query.mood.unwrap_or_else(|| "general".to_string());
        let language = LanguageCode::from_code(query.language.as_deref().unwrap_or_default());

        ZikrResponse {
            zikr_suggestions: owned(zikr_for(&mood)),
            mood,
            language,
            note: RECITATION_NOTE.to_string(),
        }
    }
}

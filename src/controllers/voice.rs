use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::voice::{
        dto::{SpeedQuery, UploadedAudio, VoiceChatQuery, VoiceChatResponse, VoiceGenerateRequest},
        VoiceService, VoiceServiceApi,
    },
    error::{AppError, AppResult},
    infrastructure::http::extract::{AppJson, AppQuery},
};

/// Multipart field carrying the recorded question
const AUDIO_FIELD: &str = "audio";

pub struct VoiceController {
    voice_service: Arc<VoiceService>,
}

impl VoiceController {
    pub fn new(voice_service: Arc<VoiceService>) -> Self {
        Self { voice_service }
    }

    /// POST /api/voice/generate?speed= - Text to downloadable MP3
    pub async fn generate(
        State(controller): State<Arc<VoiceController>>,
        AppQuery(query): AppQuery<SpeedQuery>,
        AppJson(request): AppJson<VoiceGenerateRequest>,
    ) -> AppResult<Response> {
        let audio = controller.voice_service.generate(request, query.speed).await?;

        let disposition = HeaderValue::from_str(&format!("attachment; filename={}", audio.filename))
            .map_err(|e| AppError::Internal(format!("invalid download filename: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(header::CONTENT_DISPOSITION, disposition);

        Ok((StatusCode::OK, headers, audio.bytes).into_response())
    }

    /// POST /api/voice/chat?language=&response_speed= - Voice question in, spoken answer out
    pub async fn chat(
        State(controller): State<Arc<VoiceController>>,
        AppQuery(query): AppQuery<VoiceChatQuery>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> AppResult<Json<VoiceChatResponse>> {
        let audio = read_audio_field(multipart?).await?;

        let response = controller
            .voice_service
            .chat(audio, query.language, query.response_speed)
            .await?;

        Ok(Json(response))
    }
}

async fn read_audio_field(mut multipart: Multipart) -> AppResult<UploadedAudio> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(UploadedAudio {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::BadRequest(format!(
        "Missing '{}' file in multipart body",
        AUDIO_FIELD
    )))
}

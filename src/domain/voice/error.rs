use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum VoiceServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("Transcription failed: {0}")]
    Transcription(String),
    #[error("AI response failed")]
    Generation,
    #[error("Voice generation failed")]
    Synthesis(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<VoiceServiceError> for AppError {
    fn from(err: VoiceServiceError) -> Self {
        match err {
            VoiceServiceError::Invalid(msg) => AppError::BadRequest(msg),
            VoiceServiceError::Other(e) => AppError::Internal(e.to_string()),
            dependency => AppError::ExternalService(dependency.to_string()),
        }
    }
}

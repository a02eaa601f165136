use crate::error::AppError;

/// Outcome of a single provider call that did not produce a record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ContentServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0}")]
    NotFound(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ContentServiceError> for AppError {
    fn from(err: ContentServiceError) -> Self {
        match err {
            ContentServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ContentServiceError::NotFound(msg) => AppError::NotFound(msg),
            ContentServiceError::Dependency(msg) => AppError::ExternalService(msg),
            ContentServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}

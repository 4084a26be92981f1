use axum::http::StatusCode;

/// Failure taxonomy of the entity services, mapped onto HTTP statuses at the
/// handler boundary.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A field failed validation before any write was attempted.
    #[error("validation failed: {0}")]
    Invalid(String),
    /// Insert collided with an existing natural key.
    #[error("natural key already exists")]
    Duplicate,
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Duplicate => StatusCode::CONFLICT,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

//! Service-wide error type and its HTTP mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced squad (or entry) does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Roster payload is malformed or breaks a slot limit.
    #[error("invalid roster: {0}")]
    Validation(String),

    /// The FPL feed could not be reached or answered non-2xx.
    #[error("statistics feed unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Postgres unreachable or misconfigured.
    #[error("database unavailable: {0}")]
    StorageUnavailable(String),

    /// A statement or transaction failed mid-flight.
    #[error("storage failure: {0}")]
    StorageFailure(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Short machine-readable tag used in JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation",
            AppError::UpstreamUnavailable(_) => "upstream_unavailable",
            AppError::StorageUnavailable(_) => "storage_unavailable",
            AppError::StorageFailure(_) => "storage_failure",
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row".into()),
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => AppError::StorageUnavailable(e.to_string()),
            other => AppError::StorageFailure(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::UpstreamUnavailable(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::StorageFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.kind(),
            "details": self.to_string(),
        }))
    }
}

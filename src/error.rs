use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const INVALID_BODY: &str = "Invalid request body";
pub const INTERNAL: &str = "Internal Server Error";

/// Errors surfaced by the HTTP handlers.
///
/// Only two kinds reach the client: bad input (400) and everything else (500).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("{public}: {source:#}")]
    Internal {
        public: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Wraps an integration failure, reporting only `public` to the caller.
    pub fn internal<E>(public: &'static str) -> impl FnOnce(E) -> AppError
    where
        E: Into<anyhow::Error>,
    {
        move |e| AppError::Internal {
            public,
            source: e.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFields(fields) => {
                warn!(?fields, "rejected request with missing fields");
                (StatusCode::BAD_REQUEST, MISSING_FIELDS)
            }
            AppError::InvalidBody(reason) => {
                warn!(%reason, "rejected malformed request body");
                (StatusCode::BAD_REQUEST, INVALID_BODY)
            }
            AppError::Internal { public, source } => {
                error!(error = ?source, "{public}");
                (StatusCode::INTERNAL_SERVER_ERROR, *public)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

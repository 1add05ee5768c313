use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Error envelope returned by every endpoint on failure.
///
/// Route-level failures carry only `success` and `message`. The generic
/// status handlers (unknown route, malformed body, panic) also set `error`
/// to the numeric HTTP status.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    /// HTTP status code, present on generic handler responses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 404)]
    pub error: Option<u16>,
    /// Human-readable error description.
    #[schema(example = "Question not found")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request input failed a shape check before touching the store.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// The store failed. `message` is what the client sees; `source` is only
    /// logged.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        source: DbErr,
    },

    /// Generic status handler response with a fixed message per status.
    #[error("{0}")]
    Http(StatusCode),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorBody::route(msg)),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::route(msg)),
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::route(message.to_string()),
                )
            }
            AppError::Http(status) => (status, ErrorBody::generic(status)),
        }
    }
}

impl ErrorBody {
    fn route(message: String) -> Self {
        Self {
            success: false,
            error: None,
            message,
        }
    }

    fn generic(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::NOT_FOUND => "Resource not found",
            StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable entity",
            StatusCode::INTERNAL_SERVER_ERROR => "Internal Server Error",
            other => other.canonical_reason().unwrap_or("Unknown error"),
        };
        Self {
            success: false,
            error: Some(status.as_u16()),
            message: message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

/// Attach a route-specific client message to a store error.
pub trait ResultExt<T> {
    fn or_store(self, message: &'static str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for Result<T, DbErr> {
    fn or_store(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|source| AppError::Store { message, source })
    }
}

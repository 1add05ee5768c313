use std::any::Any;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Answer for any path no route matches.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(%uri, "No route");
    AppError::Http(StatusCode::NOT_FOUND)
}

/// Answer for a known path requested with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::Http(StatusCode::METHOD_NOT_ALLOWED)
}

/// Turn a handler panic into the generic 500 envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");
    AppError::Http(StatusCode::INTERNAL_SERVER_ERROR).into_response()
}

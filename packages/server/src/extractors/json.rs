use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A `Json<T>` wrapper that turns body rejections into the generic error
/// envelope: well-formed JSON of the wrong shape is a 422, anything else
/// (syntax error, missing content type, unreadable body) is a 400.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
                match rejection {
                    JsonRejection::JsonDataError(_) => {
                        AppError::Http(StatusCode::UNPROCESSABLE_ENTITY)
                    }
                    _ => AppError::Http(StatusCode::BAD_REQUEST),
                }
            })?;
        Ok(AppJson(value))
    }
}

use std::collections::HashSet;

use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, Uri, request::Parts},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A `Query<T>` replacement for query strings. A repeated parameter keeps
/// its first value, and anything that still fails to decode is answered
/// with the generic 400 envelope.
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        first_values(&parts.uri).map(AppQuery)
    }
}

fn first_values<T: DeserializeOwned>(uri: &Uri) -> Result<T, AppError> {
    let mut seen = HashSet::new();
    let query = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| seen.insert(pair.split_once('=').map_or(*pair, |(key, _)| key)))
        .collect::<Vec<_>>()
        .join("&");

    let deduped: Uri = format!("/?{query}").parse().map_err(|err| {
        tracing::debug!(error = %err, "Rejected query string");
        AppError::Http(StatusCode::BAD_REQUEST)
    })?;

    let Query(value) = Query::<T>::try_from_uri(&deduped).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected query string");
        AppError::Http(StatusCode::BAD_REQUEST)
    })?;
    Ok(value)
}

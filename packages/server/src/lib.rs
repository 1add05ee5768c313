pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;

use axum::{Json, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::handlers::fallback;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        version = "1.0.0",
        description = "Browse, search, add and delete trivia questions, and draw quiz questions"
    ),
    tags(
        (name = "Categories", description = "Read-only question categories"),
        (name = "Questions", description = "Question listing, search, creation and deletion"),
        (name = "Quizzes", description = "Random question selection for quiz play"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::api_routes())
        .split_for_parts();

    let doc = api.clone();
    router
        .with_state(state)
        .route(
            "/api-docs/openapi.json",
            get(move || async move { Json(doc) }),
        )
        .merge(Scalar::with_url("/scalar", api))
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(CatchPanicLayer::custom(fallback::panic_response))
        .layer(TraceLayer::new_for_http())
}

use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::category::*;
use crate::handlers::question::*;
use crate::handlers::quiz::*;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_categories))
        .routes(routes!(list_category_questions))
        .routes(routes!(list_questions, create_question))
        .routes(routes!(search_questions))
        .routes(routes!(delete_question))
        .routes(routes!(play_quiz))
}

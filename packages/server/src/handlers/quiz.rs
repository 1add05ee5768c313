use axum::Json;
use axum::extract::State;
use sea_orm::prelude::Expr;
use sea_orm::*;
use tracing::instrument;

use crate::entity::question;
use crate::error::{AppError, ErrorBody, ResultExt};
use crate::extractors::json::AppJson;
use crate::models::quiz::*;
use crate::state::AppState;

const QUIZ_FAILED: &str = "An error occurred while retrieving a quiz question.";

#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "Quizzes",
    operation_id = "playQuiz",
    summary = "Draw a random unseen question",
    description = "Picks one question uniformly at random, optionally within a category, excluding every id in `previous_questions`. Returns `question: null` once nothing is left.",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = QuizResponse),
        (status = 400, description = "Category is not an identifier", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn play_quiz(
    State(state): State<AppState>,
    AppJson(payload): AppJson<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let draw = validate_quiz(payload)?;

    let mut select = question::Entity::find();
    if let Some(category) = draw.category {
        select = select.filter(question::Column::CategoryId.eq(category));
    }
    if !draw.previous_questions.is_empty() {
        select = select.filter(question::Column::Id.is_not_in(draw.previous_questions));
    }

    // RANDOM() is understood by both PostgreSQL and SQLite.
    let picked = select
        .order_by(Expr::cust("RANDOM()"), Order::Asc)
        .one(&state.db)
        .await
        .or_store(QUIZ_FAILED)?;

    if picked.is_none() {
        tracing::debug!(category = ?draw.category, "Quiz exhausted");
    }

    Ok(Json(QuizResponse {
        success: true,
        question: picked.map(Into::into),
    }))
}

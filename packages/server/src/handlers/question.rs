use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::prelude::Expr;
use sea_orm::sea_query::{Func, LikeExpr};
use sea_orm::*;
use tracing::instrument;

use crate::entity::{category, question};
use crate::error::{AppError, ErrorBody, ResultExt};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::extractors::query::AppQuery;
use crate::handlers::category::all_categories;
use crate::models::question::*;
use crate::state::AppState;

const RETRIEVE_FAILED: &str = "An error occurred while retrieving questions";
const CREATE_FAILED: &str = "An error occurred while creating the question";
const DELETE_FAILED: &str = "An error occurred while deleting the question";

const UNKNOWN_CATEGORY: &str = "Category does not exist";

const RETRIEVED: &str = "Questions retrieved successfully";

#[utoipa::path(
    get,
    path = "/questions",
    tag = "Questions",
    operation_id = "listQuestions",
    summary = "List questions, ten per page",
    description = "Returns one page of questions ordered by id, the total number of questions matching the optional category filter, and every category. A page past the end yields an empty list.",
    params(QuestionListQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query), fields(page = query.page(), category = ?query.category))]
pub async fn list_questions(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<QuestionListQuery>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let page = query.page();

    let mut select = question::Entity::find();
    if let Some(category) = query.category {
        select = select.filter(question::Column::CategoryId.eq(category));
    }

    let total_questions = select
        .clone()
        .count(&state.db)
        .await
        .or_store(RETRIEVE_FAILED)?;

    let questions = select
        .order_by_asc(question::Column::Id)
        .offset(Some(page_offset(page)))
        .limit(Some(QUESTIONS_PER_PAGE))
        .all(&state.db)
        .await
        .or_store(RETRIEVE_FAILED)?;

    let categories = all_categories(&state.db)
        .await
        .or_store(RETRIEVE_FAILED)?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: questions.into_iter().map(QuestionRecord::from).collect(),
        total_questions,
        current_category: query.category,
        categories,
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    tag = "Questions",
    operation_id = "createQuestion",
    summary = "Create a question",
    description = "Stores a new question. `question`, `answer` and `category` must be non-empty; `difficulty` defaults to 0.",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "A required field is missing or empty, or the category does not exist", body = ErrorBody),
        (status = 422, description = "Body has the wrong shape", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_question(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_question = validate_create_question(payload)?;

    // Rolled back on drop unless committed.
    let txn = state.db.begin().await.or_store(CREATE_FAILED)?;

    let known_category = category::Entity::find_by_id(new_question.category)
        .one(&txn)
        .await
        .or_store(CREATE_FAILED)?;
    if known_category.is_none() {
        return Err(AppError::Validation(UNKNOWN_CATEGORY.into()));
    }

    let model = question::ActiveModel {
        question: Set(new_question.question),
        answer: Set(new_question.answer),
        category_id: Set(new_question.category),
        difficulty: Set(new_question.difficulty),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .or_store(CREATE_FAILED)?;

    txn.commit().await.or_store(CREATE_FAILED)?;
    tracing::info!(id = model.id, "Question created");

    Ok((
        StatusCode::CREATED,
        Json(CreateQuestionResponse {
            success: true,
            message: "Question created successfully".into(),
            question: model.into(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "Questions",
    operation_id = "deleteQuestion",
    summary = "Delete a question by ID",
    params(("id" = i32, Path, description = "Question ID")),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "No question with this id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeleteQuestionResponse>, AppError> {
    let txn = state.db.begin().await.or_store(DELETE_FAILED)?;

    let existing = question::Entity::find_by_id(id)
        .one(&txn)
        .await
        .or_store(DELETE_FAILED)?;
    if existing.is_none() {
        return Err(AppError::NotFound("Question not found".into()));
    }

    question::Entity::delete_by_id(id)
        .exec(&txn)
        .await
        .or_store(DELETE_FAILED)?;
    txn.commit().await.or_store(DELETE_FAILED)?;
    tracing::info!(id, "Question deleted");

    Ok(Json(DeleteQuestionResponse {
        success: true,
        message: "Question deleted successfully".into(),
        deleted: id,
    }))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "Questions",
    operation_id = "searchQuestions",
    summary = "Search questions by text",
    description = "Case-insensitive substring match against question text only. No match is not an error.",
    request_body = SearchQuestionsRequest,
    responses(
        (status = 200, description = "Matching questions, possibly none", body = QuestionSetResponse),
        (status = 400, description = "Search term missing or empty", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn search_questions(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SearchQuestionsRequest>,
) -> Result<Json<QuestionSetResponse>, AppError> {
    let term = validate_search(payload)?;
    let escaped = escape_like(&term);
    // Fold the term the way the backend's LOWER() folds the column; SQLite only folds ASCII.
    let folded = match state.db.get_database_backend() {
        DbBackend::Sqlite => escaped.to_ascii_lowercase(),
        _ => escaped.to_lowercase(),
    };
    let pattern = format!("%{folded}%");

    let matches = question::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col(question::Column::Question)))
                .like(LikeExpr::new(pattern).escape('\\')),
        )
        .order_by_asc(question::Column::Id)
        .all(&state.db)
        .await
        .or_store(RETRIEVE_FAILED)?;

    let message = if matches.is_empty() {
        "No questions found"
    } else {
        RETRIEVED
    };
    Ok(Json(question_set(message, matches, None)))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "Questions",
    operation_id = "listCategoryQuestions",
    summary = "List every question in a category",
    description = "An unknown or empty category yields an empty list, not a 404.",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Questions in the category, possibly none", body = QuestionSetResponse),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(category_id))]
pub async fn list_category_questions(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<i32>,
) -> Result<Json<QuestionSetResponse>, AppError> {
    let matches = question::Entity::find()
        .filter(question::Column::CategoryId.eq(category_id))
        .order_by_asc(question::Column::Id)
        .all(&state.db)
        .await
        .or_store(RETRIEVE_FAILED)?;

    let message = if matches.is_empty() {
        "No questions found in the category"
    } else {
        RETRIEVED
    };
    Ok(Json(question_set(message, matches, Some(category_id))))
}

fn question_set(
    message: &str,
    rows: Vec<question::Model>,
    current_category: Option<i32>,
) -> QuestionSetResponse {
    QuestionSetResponse {
        success: true,
        message: message.to_string(),
        total_questions: rows.len() as u64,
        questions: rows.into_iter().map(QuestionRecord::from).collect(),
        current_category,
    }
}

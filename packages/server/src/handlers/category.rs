use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::instrument;

use crate::entity::category;
use crate::error::{AppError, ErrorBody, ResultExt};
use crate::models::category::*;
use crate::state::AppState;

const LIST_FAILED: &str = "An error occurred while retrieving categories";

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    operation_id = "listCategories",
    summary = "List all categories",
    description = "Returns every category ordered by id. Categories are read-only.",
    responses(
        (status = 200, description = "All categories", body = CategoryListResponse),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = all_categories(&state.db).await.or_store(LIST_FAILED)?;
    Ok(Json(CategoryListResponse {
        success: true,
        categories,
    }))
}

/// Every category as a client record, ordered by id.
pub async fn all_categories<C: ConnectionTrait>(db: &C) -> Result<Vec<CategoryRecord>, DbErr> {
    let rows = category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(CategoryRecord::from).collect())
}

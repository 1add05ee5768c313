use serde::Serialize;

use crate::entity::category;

/// A category as the client sees it.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CategoryRecord {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "type")]
    #[schema(example = "Science")]
    pub kind: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<CategoryRecord>,
}

impl From<category::Model> for CategoryRecord {
    fn from(m: category::Model) -> Self {
        Self {
            id: m.id,
            kind: m.kind,
        }
    }
}

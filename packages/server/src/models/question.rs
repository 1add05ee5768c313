use serde::{Deserialize, Serialize};

use crate::entity::question;
use crate::error::AppError;

use super::category::CategoryRecord;
pub use super::shared::{QUESTIONS_PER_PAGE, escape_like, page_offset};
use super::shared::{CategoryRef, ResolvedCategory, lenient, resolve_category};

/// A question as the client sees it.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct QuestionRecord {
    #[schema(example = 5)]
    pub id: i32,
    #[schema(example = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")]
    pub question: String,
    #[schema(example = "Maya Angelou")]
    pub answer: String,
    /// Category identifier.
    #[schema(example = 4)]
    pub category: i32,
    #[schema(example = 2)]
    pub difficulty: i32,
}

impl From<question::Model> for QuestionRecord {
    fn from(m: question::Model) -> Self {
        Self {
            id: m.id,
            question: m.question,
            answer: m.answer,
            category: m.category_id,
            difficulty: m.difficulty,
        }
    }
}

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionListQuery {
    /// Category identifier to filter by. Non-numeric values are ignored.
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<i32>,
    /// 1-based page number; anything that is not a positive integer means 1.
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<u64>,
}

impl QuestionListQuery {
    pub fn page(&self) -> u64 {
        self.page.filter(|&p| p >= 1).unwrap_or(1)
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    /// At most ten questions from the requested page.
    pub questions: Vec<QuestionRecord>,
    /// Number of questions matching the filter across all pages.
    pub total_questions: u64,
    /// The category filter echoed back, or null.
    pub current_category: Option<i32>,
    pub categories: Vec<CategoryRecord>,
}

/// Response for search and per-category listing.
#[derive(Serialize, utoipa::ToSchema)]
pub struct QuestionSetResponse {
    pub success: bool,
    #[schema(example = "Questions retrieved successfully")]
    pub message: String,
    pub questions: Vec<QuestionRecord>,
    pub total_questions: u64,
    pub current_category: Option<i32>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    /// Category identifier, as a number or a numeric string.
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Defaults to 0 when absent or null.
    #[serde(default)]
    pub difficulty: Option<i32>,
}

/// A create request that passed validation.
#[derive(Debug, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    #[schema(example = "Question created successfully")]
    pub message: String,
    pub question: QuestionRecord,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    #[schema(example = "Question deleted successfully")]
    pub message: String,
    /// Identifier of the removed question.
    pub deleted: i32,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct SearchQuestionsRequest {
    /// Case-insensitive substring to look for in question text.
    #[serde(default, rename = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: Option<String>,
}

pub const REQUIRED_FIELDS: &str = "Question, answer, and category are required fields";

pub fn validate_create_question(req: CreateQuestionRequest) -> Result<NewQuestion, AppError> {
    let question = req.question.filter(|q| !q.is_empty());
    let answer = req.answer.filter(|a| !a.is_empty());
    let category = resolve_category(req.category.as_ref());

    let (Some(question), Some(answer)) = (question, answer) else {
        return Err(AppError::Validation(REQUIRED_FIELDS.into()));
    };
    let category = match category {
        ResolvedCategory::Id(id) => id,
        ResolvedCategory::Empty => return Err(AppError::Validation(REQUIRED_FIELDS.into())),
        ResolvedCategory::Invalid => {
            return Err(AppError::Validation(
                "Category must be a category identifier".into(),
            ));
        }
    };

    Ok(NewQuestion {
        question,
        answer,
        category,
        difficulty: req.difficulty.unwrap_or(0),
    })
}

/// Returns the term to search for, or a validation error when it is empty.
pub fn validate_search(req: SearchQuestionsRequest) -> Result<String, AppError> {
    req.search_term
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Search term is required".into()))
}

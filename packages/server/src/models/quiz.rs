use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::question::QuestionRecord;
use super::shared::{CategoryRef, ResolvedCategory, resolve_category};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct QuizRequest {
    /// Category to draw from. Null, absent or id `0` means every category.
    #[serde(default, alias = "quiz_category")]
    pub category: Option<CategoryRef>,
    /// Identifiers already shown in this quiz.
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
}

/// A quiz request that passed validation.
#[derive(Debug, PartialEq, Eq)]
pub struct QuizDraw {
    pub category: Option<i32>,
    pub previous_questions: Vec<i32>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    /// The next question, or null once the category is exhausted.
    pub question: Option<QuestionRecord>,
}

pub fn validate_quiz(req: QuizRequest) -> Result<QuizDraw, AppError> {
    let category = match resolve_category(req.category.as_ref()) {
        ResolvedCategory::Empty => None,
        ResolvedCategory::Id(id) => Some(id),
        ResolvedCategory::Invalid => {
            return Err(AppError::Validation(
                "Category must be a category identifier".into(),
            ));
        }
    };
    Ok(QuizDraw {
        category,
        previous_questions: req.previous_questions.unwrap_or_default(),
    })
}

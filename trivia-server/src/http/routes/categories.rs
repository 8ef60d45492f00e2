//! Category endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, ValidId};
use crate::http::server::AppState;
use crate::models::{category_map, paginate, CategoryMap, Question};

/// GET /categories response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// GET /categories/{id}/questions response
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories - every category as an id → label map
async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store().list_categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
///
/// An existing category with no questions is a successful empty page.
async fn questions_by_category(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    PageQuery(page): PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state
        .store()
        .get_category(id)
        .await?
        .ok_or_else(|| ApiError::not_found("category", id))?;

    let questions = state.store().questions_in_category(id).await?;
    tracing::debug!(category = id, total = questions.len(), "questions by category");

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(page, &questions).to_vec(),
        total_questions: questions.len(),
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
}

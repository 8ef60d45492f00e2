//! Question endpoints - list, create, delete

use axum::{extract::State, routing::{delete, get}, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, PageQuery, ValidId};
use crate::http::server::AppState;
use crate::models::{
    category_map, paginate, CategoryMap, CreateQuestionRequest, NewQuestion, Question, QuestionId,
};

/// GET /questions response
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// POST /questions response
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// DELETE /questions/{id} response
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
}

/// GET /questions?page=N - one page of all questions, ordered by id
///
/// An empty page is a 404, whether the table is empty or the page is past
/// the end.
async fn list_questions(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let questions = state.store().list_questions().await?;

    let current = paginate(page, &questions);
    if current.is_empty() {
        return Err(ApiError::not_found("page", page.number()));
    }

    let categories = state.store().list_categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: category_map(categories),
    }))
}

/// POST /questions - insert, then echo the requested page of the full list
async fn create_question(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new = NewQuestion::try_from(req)?;
    let created = state
        .store()
        .insert_question(new)
        .await
        .map_err(ApiError::rejected)?;
    tracing::info!(id = created.id, category = created.category, "question created");

    let questions = state
        .store()
        .list_questions()
        .await
        .map_err(ApiError::rejected)?;

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        questions: paginate(page, &questions).to_vec(),
        total_questions: questions.len(),
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.store().delete_question(id).await?;
    tracing::info!(id, "question deleted");

    Ok(Json(DeletedResponse { success: true }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
}

//! Search endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, PageQuery};
use crate::http::server::AppState;
use crate::models::{paginate, Question};

/// POST /search body
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// POST /search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// POST /search - case-insensitive substring match on question text
///
/// No matches is a 404. `total_questions` counts every match, not just the
/// returned page.
async fn search(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = req
        .search_term
        .ok_or_else(|| ApiError::bad_request("searchTerm is required"))?;

    let matches = state.store().search_questions(&term).await?;
    if matches.is_empty() {
        return Err(ApiError::not_found("search match", term));
    }

    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(page, &matches).to_vec(),
        total_questions: matches.len(),
    }))
}

/// Search routes
pub fn router() -> Router<AppState> {
    Router::new().route("/search", post(search))
}

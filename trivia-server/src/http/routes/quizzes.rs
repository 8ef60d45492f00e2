//! Quiz endpoint - next unseen question

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{LooseInt, Question, QuestionId, ALL_CATEGORIES};
use crate::quiz::{select_next, QuizOutcome};

/// Category selector sent by the quiz client; id 0 means every category
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: LooseInt,
}

/// POST /quizzes body
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
}

/// POST /quizzes response. `question` is null once the pool is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    #[serde(rename = "previousQuestion")]
    pub previous_question: Vec<QuestionId>,
    pub quiz_complete: bool,
}

impl From<QuizOutcome> for QuizResponse {
    fn from(outcome: QuizOutcome) -> Self {
        let quiz_complete = outcome.is_complete();
        let (question, previous) = match outcome {
            QuizOutcome::Next { question, previous } => (Some(question), previous),
            QuizOutcome::Complete { previous } => (None, previous),
        };

        Self {
            success: true,
            question,
            previous_question: previous,
            quiz_complete,
        }
    }
}

/// POST /quizzes
async fn next_question(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = match req.quiz_category {
        Some(selector) => selector
            .id
            .to_i32()
            .ok_or_else(|| ApiError::not_found("category", &selector.id))?,
        None => ALL_CATEGORIES,
    };
    let previous = req.previous_questions.unwrap_or_default();

    let pool = if category == ALL_CATEGORIES {
        state.store().list_questions().await?
    } else {
        state
            .store()
            .get_category(category)
            .await?
            .ok_or_else(|| ApiError::not_found("category", category))?;
        state.store().questions_in_category(category).await?
    };

    let outcome = select_next(pool, &previous, &mut rand::thread_rng());
    tracing::debug!(
        category,
        asked = outcome.previous().len(),
        complete = outcome.is_complete(),
        "quiz draw"
    );

    Ok(Json(QuizResponse::from(outcome)))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}

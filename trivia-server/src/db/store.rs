//! Store abstraction consumed by the HTTP handlers

use async_trait::async_trait;

use super::repos::DbError;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Persistence operations the service relies on.
///
/// Each call is one unit of work; implementations add no locking beyond what
/// the backing store already provides.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All questions, ordered by id ascending.
    async fn list_questions(&self) -> Result<Vec<Question>, DbError>;

    /// Questions whose category reference equals `category`, ordered by id.
    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError>;

    /// Insert a question and return it with its assigned id.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError>;

    /// Permanently remove a question. `DbError::NotFound` when absent.
    async fn delete_question(&self, id: QuestionId) -> Result<(), DbError>;

    /// All categories, ordered by id ascending.
    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    /// A single category, if it exists.
    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, DbError>;
}

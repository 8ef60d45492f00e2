//! PostgreSQL repositories
//!
//! Each repository borrows the pool and runs one statement per call.
//! Ordering is done in SQL; pagination is applied by the handlers.

pub mod categories;
pub mod questions;

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::TriviaStore;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("no {resource} ids left to assign")]
    IdsExhausted { resource: &'static str },
}

/// [`TriviaStore`] backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list_for_category(category).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).create(new).await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, DbError> {
        CategoryRepo::new(&self.pool).get(id).await
    }
}

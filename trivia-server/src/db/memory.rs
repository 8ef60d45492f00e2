//! In-process store
//!
//! Backs the router in tests and in `--in-memory` runs. Data can be seeded
//! from a JSON fixture file:
//!
//! ```json
//! { "categories": [{"id": 1, "type": "Science"}],
//!   "questions":  [{"id": 1, "question": "...", "answer": "...", "category": 1, "difficulty": 2}] }
//! ```

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::repos::DbError;
use super::store::TriviaStore;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Seed data for [`MemoryStore`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Fixture loading error
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixtures: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate {resource} id {id} in fixtures")]
    DuplicateId { resource: &'static str, id: i32 },
}

#[derive(Debug)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    /// `None` once the id space is used up
    next_id: Option<QuestionId>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            questions: Vec::new(),
            next_id: Some(1),
        }
    }
}

/// [`TriviaStore`] held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `fixtures`.
    ///
    /// Rows are kept sorted by id; new questions get ids above the highest
    /// seeded one. Repeated ids in either table are rejected.
    pub fn with_fixtures(fixtures: Fixtures) -> Result<Self, FixtureError> {
        let Fixtures {
            mut categories,
            mut questions,
        } = fixtures;
        categories.sort_by_key(|c| c.id);
        questions.sort_by_key(|q| q.id);

        if let Some(pair) = categories.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(FixtureError::DuplicateId {
                resource: "category",
                id: pair[0].id,
            });
        }
        if let Some(pair) = questions.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(FixtureError::DuplicateId {
                resource: "question",
                id: pair[0].id,
            });
        }

        let next_id = match questions.last() {
            Some(q) => q.id.checked_add(1),
            None => Some(1),
        };

        Ok(Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_id,
            }),
        })
    }

    /// Load fixtures from a JSON file.
    pub async fn from_fixture_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let fixtures: Fixtures = serde_json::from_str(&raw)?;
        tracing::debug!(
            categories = fixtures.categories.len(),
            questions = fixtures.questions.len(),
            "fixtures loaded"
        );
        Self::with_fixtures(fixtures)
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        Ok(self.tables.read().await.questions.clone())
    }

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;
        let id = tables
            .next_id
            .ok_or(DbError::IdsExhausted { resource: "question" })?
            .max(1);
        tables.next_id = id.checked_add(1);

        let question = new.with_id(id);
        tables.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        let position = tables
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })?;

        tables.questions.remove(position);
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }
}

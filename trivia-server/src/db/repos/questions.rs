//! Question repository
//!
//! The category column is read and compared through an integer cast so
//! databases that declared it as text behave the same as integer ones.

use sqlx::PgPool;

use super::DbError;
use crate::models::{CategoryId, NewQuestion, Question, QuestionId};

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all questions ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category::integer AS category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// List questions filed under one category.
    pub async fn list_for_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category::integer AS category, difficulty
            FROM questions
            WHERE category::integer = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring search over the question text.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category::integer AS category, difficulty
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escape_like(term))
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Insert a question, returning the stored row.
    pub async fn create(&self, new: NewQuestion) -> Result<Question, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category::integer AS category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: QuestionId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}

/// Escape LIKE metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(escape_like("100%"), r"100\%");
        assert_eq!(escape_like("a_b"), r"a\_b");
        assert_eq!(escape_like(r"c:\"), r"c:\\");
        assert_eq!(escape_like("title"), "title");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_delete_round_trip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        let repo = QuestionRepo::new(&pool);

        let created = repo
            .create(NewQuestion {
                question: "Which planet is closest to the sun?".into(),
                answer: "Mercury".into(),
                category: 1,
                difficulty: 1,
            })
            .await
            .expect("insert failed");

        let found = repo.search("CLOSEST TO THE SUN").await.expect("search failed");
        assert!(found.iter().any(|q| q.id == created.id));

        repo.delete(created.id).await.expect("delete failed");
        let err = repo.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}

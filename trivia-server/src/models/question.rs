//! Question records and the create-question payload

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

pub type QuestionId = i32;
pub type CategoryId = i32;

/// Question record as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Validated insert payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Integer that may arrive as a JSON number or a numeric string.
///
/// Browser clients key categories by object key, so the same id shows up
/// as `3` from one form and `"3"` from another.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Text(String),
}

impl LooseInt {
    pub fn to_i32(&self) -> Option<i32> {
        match self {
            Self::Int(n) => i32::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for LooseInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// POST /questions body, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<LooseInt>,
    pub difficulty: Option<LooseInt>,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        let question = req
            .question
            .ok_or(ValidationError::Missing { field: "question" })?;
        let answer = req.answer.ok_or(ValidationError::Missing { field: "answer" })?;
        let category = required_int(req.category, "category")?;
        let difficulty = required_int(req.difficulty, "difficulty")?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn required_int(value: Option<LooseInt>, field: &'static str) -> Result<i32, ValidationError> {
    value
        .ok_or(ValidationError::Missing { field })?
        .to_i32()
        .ok_or(ValidationError::InvalidFormat {
            field,
            reason: "expected an integer",
        })
}

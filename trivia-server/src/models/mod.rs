//! Domain models
//!
//! Request input is checked when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod question;
pub mod category;
pub mod pagination;

pub use validation::ValidationError;
pub use question::{CategoryId, CreateQuestionRequest, LooseInt, NewQuestion, Question, QuestionId};
pub use category::{category_map, Category, CategoryMap, ALL_CATEGORIES};
pub use pagination::{paginate, Page, PageParams, QUESTIONS_PER_PAGE};

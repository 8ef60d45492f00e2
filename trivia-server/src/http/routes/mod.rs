//! Route handlers organized by resource

pub mod categories;
pub mod fallback;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod search;

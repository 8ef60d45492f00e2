//! trivia-server: HTTP backend for a trivia question store
//!
//! Lists and paginates questions, lists categories, creates, deletes and
//! searches questions, filters by category, and serves a quiz endpoint that
//! hands out one unseen question at a time.
//!
//! Handlers reach persistence only through [`db::TriviaStore`], so the same
//! router runs against PostgreSQL ([`db::PgStore`]) or memory
//! ([`db::MemoryStore`]).

pub mod db;
pub mod http;
pub mod models;
pub mod quiz;

pub use db::{MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};

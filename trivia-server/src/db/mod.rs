//! Persistence layer - the store seam, connection pool and implementations
//!
//! Handlers only see [`TriviaStore`]. [`PgStore`] talks to PostgreSQL through
//! the repositories in [`repos`]; [`MemoryStore`] keeps everything in process
//! for tests and local runs. Schema creation is the database owner's job.

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::{Fixtures, FixtureError, MemoryStore};
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{CategoryRepo, DbError, PgStore, QuestionRepo};
pub use store::TriviaStore;

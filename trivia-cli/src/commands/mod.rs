//! Command implementations for the trivia CLI

pub mod serve;

pub use serve::run_serve;

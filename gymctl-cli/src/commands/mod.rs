//! Command implementations for gymctl CLI

pub mod db_args;
pub mod schema;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use schema::run_schema;
pub use serve::run_serve;

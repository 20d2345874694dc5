//! Repository implementations for database access
//!
//! Each repository borrows one connection acquired by the caller:
//! - One parameterised statement per operation
//! - Zero rows on a single-record read is `NotFound`, not a query failure
//! - The cascading member delete runs in one transaction

pub mod members;
pub mod workout_sessions;

pub use members::{Member, MemberRepo};
pub use workout_sessions::{WorkoutSession, WorkoutSessionRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No connection could be obtained
    #[error("connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement failed on an open connection
    #[error("database error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },
}

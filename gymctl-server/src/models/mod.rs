//! Input schemas with validation at construction
//!
//! Request bodies are loaded into these types before any connection is
//! taken. Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod member;
pub mod workout_session;

pub use validation::{FieldError, FieldLoader, Schema, ValidationError};
pub use member::MemberInput;
pub use workout_session::WorkoutSessionInput;

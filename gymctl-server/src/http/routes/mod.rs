//! Route handlers organized by resource

pub mod health;
pub mod members;
pub mod workout_sessions;

use serde::Serialize;

/// `{"message": ...}` body returned by create, update and delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store failures are logged here and never leak detail to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400, field map body)
    Validation(ValidationError),

    /// Body is not declared as JSON (415)
    UnsupportedMediaType,

    /// Record not found (404)
    NotFound { resource: &'static str },

    /// No route matched (404)
    RouteNotFound,

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Store unreachable (500, logged)
    Connection(DbError),

    /// Statement failed (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::NotFound { .. } | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Connection(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(e) => {
                tracing::debug!("Rejected input: {}", e);
                json!(e)
            }
            Self::UnsupportedMediaType => json!({
                "error": "Content-Type must be application/json"
            }),
            Self::NotFound { resource } => json!({
                "error": format!("{} not found", capitalize(resource))
            }),
            Self::RouteNotFound => json!({ "error": "Not found" }),
            Self::MethodNotAllowed => json!({ "error": "Method not allowed" }),
            Self::Connection(e) => {
                tracing::error!("Database connection failed: {}", e);
                json!({ "error": "Database connection failed" })
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                json!({ "error": "Internal Server Error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            DbError::Connection(_) => Self::Connection(e),
            DbError::Query(_) => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use crate::models::FieldError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_field_map() {
        let mut errors = ValidationError::default();
        errors.push("name", FieldError::Missing);
        let response = ApiError::Validation(errors).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"name": ["Missing data for required field."]})
        );
    }

    #[tokio::test]
    async fn not_found_names_the_resource() {
        let err: ApiError = DbError::NotFound {
            resource: "workout session",
            id: 9,
        }
        .into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Workout session not found"})
        );
    }

    #[tokio::test]
    async fn query_error_hides_detail() {
        let err: ApiError = DbError::Query(sqlx::Error::RowNotFound).into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn connection_error_is_distinct_500() {
        let err: ApiError = DbError::Connection(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, ApiError::Connection(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Database connection failed"})
        );
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("member"), "Member");
        assert_eq!(capitalize(""), "");
    }
}

//! Member endpoints
//!
//! Every handler validates first, then acquires its own connection. The
//! connection guard is dropped when the handler returns, whichever path it
//! takes.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::{Member, MemberRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::server::AppState;
use crate::models::MemberInput;
use super::MessageResponse;

/// POST /members - create a member
async fn create_member(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<MemberInput>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let mut conn = state.db.acquire().await?;
    MemberRepo::new(&mut conn).insert(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("New member added successfully")),
    ))
}

/// GET /members - list all members
async fn list_members(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Member>>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let members = MemberRepo::new(&mut conn).list_all().await?;
    Ok(Json(members))
}

/// GET /members/{id} - get a single member
async fn get_member(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Member>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let member = MemberRepo::new(&mut conn).get_by_id(id).await?;
    Ok(Json(member))
}

/// PUT /members/{id} - replace name and age
///
/// An id with no member still answers 200; the affected row count is only
/// logged.
async fn update_member(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    ValidJson(input): ValidJson<MemberInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let affected = MemberRepo::new(&mut conn).update(id, &input).await?;

    if affected == 0 {
        tracing::debug!(member_id = id, "update matched no member");
    }

    Ok(Json(MessageResponse::new("Member updated successfully")))
}

/// DELETE /members/{id} - delete a member and its workout sessions
async fn delete_member(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = state.db.acquire().await?;
    MemberRepo::new(&mut conn).delete_cascade(id).await?;

    Ok(Json(MessageResponse::new("Member deleted successfully")))
}

/// Member routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::http::testing::{send, unreachable_app};

    #[tokio::test]
    async fn create_missing_name_is_400() {
        let (status, body) = send(
            unreachable_app(),
            "POST",
            "/members",
            Some(json!({"age": "30"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"name": ["Missing data for required field."]}));
    }

    #[tokio::test]
    async fn create_with_numeric_age_is_400() {
        let (status, body) = send(
            unreachable_app(),
            "POST",
            "/members",
            Some(json!({"name": "Alice", "age": 30})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"age": ["Not a valid string."]}));
    }

    #[tokio::test]
    async fn valid_create_without_store_is_500() {
        let (status, body) = send(
            unreachable_app(),
            "POST",
            "/members",
            Some(json!({"name": "Alice", "age": "30"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Database connection failed"}));
    }

    #[tokio::test]
    async fn list_without_store_is_500() {
        let (status, body) = send(unreachable_app(), "GET", "/members", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Database connection failed"}));
    }

    #[tokio::test]
    async fn update_validates_before_connecting() {
        let (status, body) = send(
            unreachable_app(),
            "PUT",
            "/members/1",
            Some(json!({"name": null})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "name": ["Field may not be null."],
                "age": ["Missing data for required field."]
            })
        );
    }

    #[tokio::test]
    async fn non_integer_id_is_404() {
        for uri in ["/members/abc", "/members/-3"] {
            let (status, body) = send(unreachable_app(), "GET", uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({"error": "Not found"}));
        }
    }

    #[tokio::test]
    async fn oversized_id_still_matches_route() {
        let (status, body) = send(unreachable_app(), "GET", "/members/99999999999", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Database connection failed"}));
    }

    #[tokio::test]
    async fn delete_without_store_is_500() {
        let (status, _) = send(unreachable_app(), "DELETE", "/members/1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}

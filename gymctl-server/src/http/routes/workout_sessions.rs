//! Workout session endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::{WorkoutSession, WorkoutSessionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::server::AppState;
use crate::models::WorkoutSessionInput;
use super::MessageResponse;

/// POST /workoutsessions - create a session (member_id is not checked)
async fn create_session(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<WorkoutSessionInput>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let mut conn = state.db.acquire().await?;
    WorkoutSessionRepo::new(&mut conn).insert(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("New workout added successfully")),
    ))
}

/// GET /workoutsessions - list all sessions
async fn list_sessions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let sessions = WorkoutSessionRepo::new(&mut conn).list_all().await?;
    Ok(Json(sessions))
}

/// GET /workoutsessions/{id} - get a single session
async fn get_session(
    State(state): State<Arc<AppState>>,
    RecordId(session_id): RecordId,
) -> Result<Json<WorkoutSession>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let session = WorkoutSessionRepo::new(&mut conn).get_by_id(session_id).await?;
    Ok(Json(session))
}

/// PUT /workoutsessions/{id} - update date, time and activity
async fn update_session(
    State(state): State<Arc<AppState>>,
    RecordId(session_id): RecordId,
    ValidJson(input): ValidJson<WorkoutSessionInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let affected = WorkoutSessionRepo::new(&mut conn)
        .update(session_id, &input)
        .await?;

    if affected == 0 {
        tracing::debug!(session_id, "update matched no workout session");
    }

    Ok(Json(MessageResponse::new("Workout session updated successfully")))
}

/// Workout session routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workoutsessions", get(list_sessions).post(create_session))
        .route("/workoutsessions/{id}", get(get_session).put(update_session))
}

//! Workout session repository
//!
//! Same shape as the member repository minus delete. `member_id` is only
//! written on insert.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, PgConnection};

use crate::models::WorkoutSessionInput;
use super::DbError;

/// Workout session record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct WorkoutSession {
    pub session_id: i32,
    pub member_id: i32,
    pub session_date: NaiveDate,
    pub session_time: String,
    pub activity: String,
}

/// Workout session repository
pub struct WorkoutSessionRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> WorkoutSessionRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a session. `member_id` is stored without checking it exists.
    pub async fn insert(&mut self, session: &WorkoutSessionInput) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO WorkoutSessions (member_id, session_date, session_time, activity)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.member_id)
        .bind(session.session_date)
        .bind(&session.session_time)
        .bind(&session.activity)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// All sessions, in storage order.
    pub async fn list_all(&mut self) -> Result<Vec<WorkoutSession>, DbError> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(
            r#"
            SELECT session_id, member_id, session_date, session_time, activity
            FROM WorkoutSessions
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(sessions)
    }

    /// Get a single session by primary key.
    pub async fn get_by_id(&mut self, session_id: i64) -> Result<WorkoutSession, DbError> {
        sqlx::query_as::<_, WorkoutSession>(
            r#"
            SELECT session_id, member_id, session_date, session_time, activity
            FROM WorkoutSessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(DbError::NotFound {
            resource: "workout session",
            id: session_id,
        })
    }

    /// Update date, time and activity. `member_id` in the input is ignored.
    pub async fn update(
        &mut self,
        session_id: i64,
        session: &WorkoutSessionInput,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE WorkoutSessions
            SET session_date = $1, session_time = $2, activity = $3
            WHERE session_id = $4
            "#,
        )
        .bind(session.session_date)
        .bind(&session.session_time)
        .bind(&session.activity)
        .bind(session_id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected())
    }
}

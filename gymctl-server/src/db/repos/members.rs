//! Member repository
//!
//! - insert / update: single statement, affected rows returned as-is
//! - list: no ORDER BY, rows come back in storage order
//! - delete_cascade: sessions first, then the member, one transaction

use serde::Serialize;
use sqlx::{Connection, FromRow, PgConnection};

use crate::models::MemberInput;
use super::DbError;

/// Member record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub age: String,
}

/// Member repository
pub struct MemberRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> MemberRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a member. The generated id is not returned.
    pub async fn insert(&mut self, member: &MemberInput) -> Result<u64, DbError> {
        let result = sqlx::query("INSERT INTO Members (name, age) VALUES ($1, $2)")
            .bind(&member.name)
            .bind(&member.age)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// All members, in storage order.
    pub async fn list_all(&mut self) -> Result<Vec<Member>, DbError> {
        let members = sqlx::query_as::<_, Member>("SELECT id, name, age FROM Members")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(members)
    }

    /// Get a single member by primary key.
    pub async fn get_by_id(&mut self, id: i64) -> Result<Member, DbError> {
        sqlx::query_as::<_, Member>("SELECT id, name, age FROM Members WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or(DbError::NotFound {
                resource: "member",
                id,
            })
    }

    /// Replace name and age.
    ///
    /// Returns the affected row count; zero means no member had that id,
    /// which callers treat as success.
    pub async fn update(&mut self, id: i64, member: &MemberInput) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE Members SET age = $1, name = $2 WHERE id = $3")
            .bind(&member.age)
            .bind(&member.name)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a member and every workout session pointing at it.
    ///
    /// Both statements share one transaction. If either fails the
    /// transaction is dropped uncommitted and rolls back.
    pub async fn delete_cascade(&mut self, id: i64) -> Result<(), DbError> {
        let mut tx = self.conn.begin().await?;

        let sessions = sqlx::query("DELETE FROM WorkoutSessions WHERE member_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM Members WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            member_id = id,
            sessions = sessions.rows_affected(),
            "deleted member with sessions"
        );
        Ok(())
    }
}

//! Table bootstrap
//!
//! Creates the two tables when they are missing. This is not a migration
//! system: existing tables are left untouched.

use sqlx::PgConnection;

use super::repos::DbError;

/// `Members(id, name, age)`. `age` is text on purpose.
pub const CREATE_MEMBERS: &str = r#"
CREATE TABLE IF NOT EXISTS Members (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    age TEXT NOT NULL
)"#;

/// `WorkoutSessions(session_id, member_id, session_date, session_time, activity)`.
///
/// `member_id` deliberately has no foreign key.
pub const CREATE_WORKOUT_SESSIONS: &str = r#"
CREATE TABLE IF NOT EXISTS WorkoutSessions (
    session_id SERIAL PRIMARY KEY,
    member_id INTEGER NOT NULL,
    session_date DATE NOT NULL,
    session_time TEXT NOT NULL,
    activity TEXT NOT NULL
)"#;

/// All bootstrap statements, in execution order.
pub const STATEMENTS: [&str; 2] = [CREATE_MEMBERS, CREATE_WORKOUT_SESSIONS];

/// Bootstrap DDL as a single script, for printing.
pub fn ddl() -> String {
    STATEMENTS
        .iter()
        .map(|stmt| format!("{};\n", stmt.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create both tables if they do not exist yet.
pub async fn ensure_schema(conn: &mut PgConnection) -> Result<(), DbError> {
    tracing::info!("Ensuring Members and WorkoutSessions tables exist");

    for stmt in STATEMENTS {
        sqlx::query(stmt).execute(&mut *conn).await?;
    }

    Ok(())
}

//! Table bootstrap command
//!
//! Prints the CREATE TABLE statements, or applies them with `--apply`.

use anyhow::{Context, Result};
use clap::Parser;

use gymctl_server::db::schema;

use super::db_args::DbArgs;

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Execute the statements against the configured database instead of printing them
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_schema(args: SchemaArgs) -> Result<()> {
    if !args.apply {
        print!("{}", schema::ddl());
        return Ok(());
    }

    let db = args.db.provider()?;
    let mut conn = db.acquire().await.context("Failed to connect to database")?;
    schema::ensure_schema(&mut conn)
        .await
        .context("Failed to create tables")?;

    tracing::info!("Members and WorkoutSessions tables are in place");
    Ok(())
}

//! HTTP server command
//!
//! Runs the gymctl HTTP server for members and workout sessions.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use gymctl_server::db::schema;
use gymctl_server::{run_server, ServerConfig};

use super::db_args::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', env = "GYMCTL_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Create the Members and WorkoutSessions tables if missing before serving
    #[arg(long)]
    pub bootstrap_schema: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db = args.db.provider()?;

    if args.bootstrap_schema {
        let mut conn = db
            .acquire()
            .await
            .context("Failed to connect for schema bootstrap")?;
        schema::ensure_schema(&mut conn)
            .await
            .context("Failed to create tables")?;
    }

    tracing::info!("Starting gymctl server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(db, config).await.context("Server error")?;

    Ok(())
}

//! Database connection arguments shared by `serve` and `schema`

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use sqlx::postgres::PgConnectOptions;

use gymctl_server::db::{create_pool_with_options, pool, ConnectionProvider, DbConfig};

/// Store endpoint and credentials
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Full connection URL; overrides the individual --db-* options
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "GYMCTL_DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "GYMCTL_DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database name
    #[arg(long, env = "GYMCTL_DB_NAME", default_value = "gymctl")]
    pub db_name: String,

    /// Database user
    #[arg(long, env = "GYMCTL_DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "GYMCTL_DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Maximum pooled connections
    #[arg(long, env = "GYMCTL_MAX_CONNECTIONS", default_value_t = pool::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds a request waits for a connection before failing
    #[arg(long, default_value_t = pool::DEFAULT_ACQUIRE_TIMEOUT.as_secs())]
    pub acquire_timeout: u64,
}

impl DbArgs {
    /// Connect options from the URL when given, otherwise from the parts.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        match &self.database_url {
            Some(url) => url
                .parse()
                .context("DATABASE_URL is not a valid Postgres connection string"),
            None => Ok(self.db_config().connect_options()),
        }
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            database: self.db_name.clone(),
            user: self.db_user.clone(),
            password: self.db_password.clone(),
        }
    }

    /// Lazily-connected provider; nothing is opened until first use.
    pub fn provider(&self) -> Result<ConnectionProvider> {
        let pool = create_pool_with_options(
            self.connect_options()?,
            self.max_connections,
            Duration::from_secs(self.acquire_timeout),
        );
        Ok(ConnectionProvider::new(pool))
    }
}

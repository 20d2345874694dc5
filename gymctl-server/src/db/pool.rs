//! Connection provider
//!
//! Uses a lazily-connected sqlx PgPool. Every handler acquires its own
//! connection through [`ConnectionProvider::acquire`]; the returned guard
//! goes back to the pool when dropped, on every exit path.

use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Postgres};

use super::repos::DbError;

/// Default maximum connections for the pool.
/// Kept low for a single small service.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long `acquire` waits for a usable connection (sqlx's own default).
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Store endpoint and credentials, injected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "gymctl".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
        }
    }
}

impl DbConfig {
    /// Build sqlx connect options from the configured parts.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

/// Create a lazily-connected pool with default limits.
///
/// No connection is opened until the first request; an unreachable store
/// surfaces per request as [`DbError::Connection`].
///
/// Must be called from within a tokio runtime.
pub fn create_pool(options: PgConnectOptions) -> PgPool {
    create_pool_with_options(options, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT)
}

/// Create a lazily-connected pool with custom limits.
///
/// # Arguments
///
/// * `options` - Postgres connect options
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long a handler waits for a connection
pub fn create_pool_with_options(
    options: PgConnectOptions,
    max_connections: u32,
    acquire_timeout: Duration,
) -> PgPool {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy_with(options)
}

/// Hands out one connection per request.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    pool: PgPool,
}

impl ConnectionProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Acquire a connection for the current request.
    ///
    /// Failure is reported as [`DbError::Connection`], distinct from
    /// statement failures. There is no retry.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, DbError> {
        self.pool.acquire().await.map_err(DbError::Connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DbConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "gymctl");
    }

    #[test]
    fn connect_options_carry_parts() {
        let config = DbConfig {
            host: "db.internal".into(),
            port: 6543,
            database: "gym".into(),
            user: "coach".into(),
            password: "secret".into(),
        };
        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("gym"));
        assert_eq!(options.get_username(), "coach");
    }

    #[tokio::test]
    async fn unreachable_store_is_connection_error() {
        let options = PgConnectOptions::new().host("127.0.0.1").port(1);
        let pool = create_pool_with_options(options, 1, Duration::from_millis(200));
        let provider = ConnectionProvider::new(pool);

        let err = provider.acquire().await.err().unwrap();
        assert!(matches!(err, DbError::Connection(_)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let options: PgConnectOptions = url.parse().expect("invalid DATABASE_URL");
        let provider = ConnectionProvider::new(create_pool(options));

        let mut conn = provider.acquire().await.expect("acquire failed");
        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&mut *conn)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_acquisition() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let options: PgConnectOptions = url.parse().expect("invalid DATABASE_URL");
        let provider = ConnectionProvider::new(create_pool(options));

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let provider = provider.clone();
                tokio::spawn(async move {
                    let mut conn = provider.acquire().await.expect("acquire failed");
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&mut *conn)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}

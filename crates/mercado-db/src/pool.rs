//! # Database Pool Management
//!
//! Connection pool creation and configuration for PostgreSQL.
//!
//! ## Lazy Connections
//! The pool opens connections on first use, not at construction. The HTTP
//! service must start and answer requests while PostgreSQL is down - the
//! health endpoint then reports the failure instead of the process dying
//! at boot.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use crate::error::DbResult;
use crate::repository::producto::ProductoRepository;
use crate::schema;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust
/// use mercado_db::DbConfig;
///
/// let config = DbConfig::new("localhost", 5432, "admin", "admin123", "entidad_db")
///     .max_connections(10);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL host.
    pub host: String,

    /// PostgreSQL port.
    pub port: u16,

    /// Database user.
    pub user: String,

    /// Database password.
    pub password: String,

    /// Database name.
    pub database: String,

    /// Maximum number of connections in the pool.
    /// Default: 10
    pub max_connections: u32,

    /// How long an acquire may wait for a free connection.
    /// Default: 30 seconds
    pub acquire_timeout: Duration,
}

impl DbConfig {
    /// Creates a configuration from connection parts.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        DbConfig {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            database: database.into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the acquire timeout.
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Builds sqlx connect options from the parts. No URL is assembled, so
    /// the password needs no percent-escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// Cloning is cheap - the inner `PgPool` is reference-counted, so the HTTP
/// app clones this into its shared state and every handler borrows one
/// connection per query.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Creates the connection pool.
    ///
    /// Connections are opened lazily: this never fails and never blocks,
    /// even with PostgreSQL unreachable. The first query pays the
    /// connection cost and reports any failure.
    pub fn connect(config: &DbConfig) -> Self {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            max_connections = config.max_connections,
            "Creating database pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(config.connect_options());

        Database { pool }
    }

    /// Ensures the `productos` table exists. Idempotent.
    pub async fn ensure_schema(&self) -> DbResult<()> {
        schema::ensure_schema(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let productos = db.productos().list().await?;
    /// ```
    pub fn productos(&self) -> ProductoRepository {
        ProductoRepository::new(self.pool.clone())
    }

    /// Round-trips the database and returns its clock.
    ///
    /// One `SELECT NOW()` per call - the health endpoint's connectivity
    /// probe, with the timestamp doubling as its payload.
    pub async fn now(&self) -> DbResult<DateTime<Utc>> {
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;

        Ok(now)
    }

    /// Closes the connection pool. Call on shutdown.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = DbConfig::new("localhost", 5432, "admin", "admin123", "entidad_db");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("db", 5433, "u", "p", "d")
            .max_connections(3)
            .acquire_timeout(Duration::from_secs(5));

        assert_eq!(config.max_connections, 3);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_connect_options_from_parts() {
        let config = DbConfig::new("db.internal", 5433, "admin", "admin123", "entidad_db");
        let options = config.connect_options();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "admin");
        assert_eq!(options.get_database(), Some("entidad_db"));
    }

    #[tokio::test]
    async fn test_lazy_connect_never_fails() {
        // No PostgreSQL behind this address; pool construction must still work.
        let config = DbConfig::new("localhost", 1, "nobody", "nothing", "nowhere");
        let db = Database::connect(&config);
        assert!(!db.pool().is_closed());
    }
}

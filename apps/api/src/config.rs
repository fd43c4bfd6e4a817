//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so the service runs unconfigured on a developer machine and
//! fully parameterized in a container.

use std::env;

use mercado_db::DbConfig;

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// PostgreSQL host
    pub db_host: String,

    /// PostgreSQL port
    pub db_port: u16,

    /// Database user
    pub db_user: String,

    /// Database password
    pub db_password: String,

    /// Database name
    pub db_name: String,

    /// Environment label (diagnostic output only)
    pub environment: String,

    /// Deployment identifier, reported by /health as `despliegue`
    pub deployment: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),

            db_port: env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_PORT".to_string()))?,

            db_user: env::var("DB_USER").unwrap_or_else(|_| "admin".to_string()),

            db_password: env::var("DB_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),

            db_name: env::var("DB_NAME").unwrap_or_else(|_| "entidad_db".to_string()),

            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),

            deployment: env::var("DEPLOYMENT_NAME").unwrap_or_else(|_| "local".to_string()),
        };

        Ok(config)
    }

    /// Builds the database configuration from the DB_* parts.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(
            &self.db_host,
            self.db_port,
            &self.db_user,
            &self.db_password,
            &self.db_name,
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ApiConfig {
        ApiConfig {
            port: 3000,
            db_host: "db.internal".to_string(),
            db_port: 5433,
            db_user: "admin".to_string(),
            db_password: "admin123".to_string(),
            db_name: "entidad_db".to_string(),
            environment: "production".to_string(),
            deployment: "codespace-7".to_string(),
        }
    }

    #[test]
    fn test_db_config_carries_all_parts() {
        let db = sample().db_config();
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.port, 5433);
        assert_eq!(db.user, "admin");
        assert_eq!(db.password, "admin123");
        assert_eq!(db.database, "entidad_db");
    }
}

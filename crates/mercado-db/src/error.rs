//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! PostgreSQL error (sqlx::Error)
//!      │
//!      ▼
//! DbError (this module) - categorized, message preserved
//!      │
//!      ▼
//! ApiError (apps/api) - mapped to an HTTP status, message in the body
//! ```
//!
//! The underlying database message is kept intact: the service surfaces
//! storage failures verbatim in 500 responses.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Could not reach or authenticate against PostgreSQL.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A statement failed at execution time.
    ///
    /// Carries the database's own message - constraint violations and
    /// malformed parameters (e.g. a non-numeric id cast with `::INT4`)
    /// both land here.
    #[error("{0}")]
    QueryFailed(String),

    /// All pooled connections are in use and the acquire timed out.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Anything sqlx reports that doesn't fit the categories above.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database      → DbError::QueryFailed (message preserved)
/// sqlx::Error::Io            → DbError::ConnectionFailed
/// sqlx::Error::PoolTimedOut  → DbError::PoolExhausted
/// sqlx::Error::PoolClosed    → DbError::ConnectionFailed
/// Other                      → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),
            sqlx::Error::Tls(tls_err) => DbError::ConnectionFailed(tls_err.to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DbError::PoolExhausted));
    }

    #[test]
    fn test_pool_closed_maps_to_connection_failed() {
        let err = DbError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }

    #[test]
    fn test_row_not_found_maps_to_internal() {
        // Repositories use fetch_optional, so this path is a safety net only.
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Internal(_)));
    }

    #[test]
    fn test_query_failed_display_is_bare_message() {
        // The 500 body carries this text; no prefix gets prepended.
        let err = DbError::QueryFailed("relation \"productos\" does not exist".to_string());
        assert_eq!(err.to_string(), "relation \"productos\" does not exist");
    }
}

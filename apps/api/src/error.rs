//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  ValidationError (mercado-core) ──► 400  {"error": message}      │
//! │  no row matched id              ──► 404  {"error": message}      │
//! │  DbError (mercado-db)           ──► 500  {"error": message}      │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retries and no transformation: handlers either validate before
//! querying (400) or let the storage failure propagate verbatim into the
//! response payload (500). Transient and permanent database failures are
//! not distinguished.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use mercado_core::ValidationError;
use mercado_db::DbError;

/// API error returned from handlers.
///
/// Every variant renders as `{"error": <message>}` with the status below.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing required fields on creation (400).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No row matched the requested id (404). Carries the full message.
    #[error("{0}")]
    NotFound(String),

    /// Storage failure, message surfaced verbatim (500).
    #[error("{0}")]
    Database(#[from] DbError),
}

impl ApiError {
    /// The 404 for a missing product, with the id the client asked for.
    pub fn producto_no_encontrado(id: &str) -> Self {
        ApiError::NotFound(format!("Producto con ID {id} no encontrado"))
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ApiError::Database(ref err) = self {
            error!(%err, "Database error surfaced as 500");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response = ApiError::from(ValidationError::CamposObligatorios).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = ApiError::producto_no_encontrado("42");
        assert_eq!(err.to_string(), "Producto con ID 42 no encontrado");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_maps_to_500() {
        let err = ApiError::from(DbError::QueryFailed("boom".to_string()));
        assert_eq!(err.to_string(), "boom");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

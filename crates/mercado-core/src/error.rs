//! # Error Types
//!
//! Validation errors for mercado-core.
//!
//! The database layer has its own `DbError` (in mercado-db) and the HTTP app
//! folds both into its `ApiError`. Flow:
//! `ValidationError → ApiError (400)` / `DbError → ApiError (500)`.

use thiserror::Error;

/// Input validation errors.
///
/// Raised before any query runs. The message is the public API contract -
/// it goes into the response body verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `nombre` or `precio` missing (or `nombre` empty) on creation.
    #[error("Los campos nombre y precio son obligatorios")]
    CamposObligatorios,
}

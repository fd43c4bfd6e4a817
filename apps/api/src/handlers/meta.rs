//! # Service Endpoints
//!
//! Root directory, health check, and schema initialization.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::ApiError;
use crate::routes::AppState;

/// `GET /` - service metadata and endpoint directory.
pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "mensaje": "API de Productos",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /health",
            "init": "GET /init",
            "productos": {
                "crear": "POST /productos",
                "listar": "GET /productos",
                "obtener": "GET /productos/:id",
                "actualizar": "PUT /productos/:id",
                "eliminar": "DELETE /productos/:id"
            }
        }
    }))
}

/// `GET /health` - database connectivity probe.
///
/// One round-trip (`SELECT NOW()`); the database's clock is the payload.
/// Both branches build their body here rather than through [`ApiError`]
/// because the health contract has its own shape:
/// `{estado, baseDatos, timestamp, despliegue}` on success,
/// `{estado, baseDatos, error}` with 500 when the database is unreachable.
pub async fn health(State(state): State<AppState>) -> Response {
    match state.db.now().await {
        Ok(timestamp) => Json(json!({
            "estado": "OK",
            "baseDatos": "Conectada",
            "timestamp": timestamp,
            "despliegue": state.config.deployment,
        }))
        .into_response(),

        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "estado": "ERROR",
                "baseDatos": "Desconectada",
                "error": err.to_string(),
            })),
        )
            .into_response(),
    }
}

/// `GET /init` - ensures the `productos` table exists.
///
/// Kept on a GET for compatibility with existing clients even though it is
/// schema-mutating; startup also runs the same initialization, so normal
/// deployments never need to call this.
pub async fn init(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    state.db.ensure_schema().await?;

    Ok(Json(json!({
        "mensaje": "Tabla productos creada exitosamente",
        "nota": "Ahora puedes crear productos usando POST /productos",
    })))
}

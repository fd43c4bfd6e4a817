//! # Product Handlers
//!
//! The CRUD routes. Each handler validates its input, runs exactly one
//! repository call, and serializes the result - nothing else.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  POST /productos {"nombre":"Widget","precio":9.99}              │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  serde: CrearProducto (typed, all fields optional)              │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  validar_nuevo_producto ── missing nombre/precio? ──► 400       │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ProductoRepository::insert ── db error? ──► 500                │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  201 {"mensaje":"Producto creado","producto":{..}}              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `:id` path parameter is deliberately NOT parsed here - it rides to
//! the repository as an opaque string and PostgreSQL casts it, so a
//! malformed id is a storage error (500), not a routing rejection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mercado_core::validation::validar_nuevo_producto;
use mercado_core::{CambiosProducto, Producto};

use crate::error::ApiError;
use crate::routes::AppState;

// =============================================================================
// Request / Response DTOs
// =============================================================================

/// `POST /productos` body. All fields optional at the type level; the
/// presence of `nombre` and `precio` is checked by validation so the 400
/// carries the contract message instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct CrearProducto {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<Decimal>,
    pub stock: Option<i32>,
}

/// Confirmation envelope: `{mensaje, producto}`.
#[derive(Debug, Serialize)]
pub struct ProductoConMensaje {
    pub mensaje: &'static str,
    pub producto: Producto,
}

/// `GET /productos` response: `{total, productos}`.
#[derive(Debug, Serialize)]
pub struct ListaProductos {
    pub total: usize,
    pub productos: Vec<Producto>,
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /productos` - creates one product.
pub async fn crear(
    State(state): State<AppState>,
    Json(body): Json<CrearProducto>,
) -> Result<(StatusCode, Json<ProductoConMensaje>), ApiError> {
    let nuevo = validar_nuevo_producto(body.nombre, body.descripcion, body.precio, body.stock)?;

    let producto = state.db.productos().insert(&nuevo).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductoConMensaje {
            mensaje: "Producto creado",
            producto,
        }),
    ))
}

/// `GET /productos` - every row, ascending id, with a count.
pub async fn listar(State(state): State<AppState>) -> Result<Json<ListaProductos>, ApiError> {
    let productos = state.db.productos().list().await?;

    Ok(Json(ListaProductos {
        total: productos.len(),
        productos,
    }))
}

/// `GET /productos/:id` - single row, or 404 naming the requested id.
pub async fn obtener(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Producto>, ApiError> {
    let producto = state
        .db
        .productos()
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::producto_no_encontrado(&id))?;

    Ok(Json(producto))
}

/// `PUT /productos/:id` - coalesce-based partial update.
///
/// Omitted fields and explicit nulls both preserve the stored value;
/// `updated_at` advances either way.
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(cambios): Json<CambiosProducto>,
) -> Result<Json<ProductoConMensaje>, ApiError> {
    let producto = state
        .db
        .productos()
        .update(&id, &cambios)
        .await?
        .ok_or_else(|| ApiError::producto_no_encontrado(&id))?;

    Ok(Json(ProductoConMensaje {
        mensaje: "Producto actualizado",
        producto,
    }))
}

/// `DELETE /productos/:id` - removes the row and returns its final state.
pub async fn eliminar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductoConMensaje>, ApiError> {
    let producto = state
        .db
        .productos()
        .delete(&id)
        .await?
        .ok_or_else(|| ApiError::producto_no_encontrado(&id))?;

    Ok(Json(ProductoConMensaje {
        mensaje: "Producto eliminado",
        producto,
    }))
}

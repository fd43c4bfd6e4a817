//! # Schema Initialization
//!
//! Idempotent creation of the `productos` table.
//!
//! Not a migrations framework: the service owns exactly one table and the
//! DDL is guarded by `IF NOT EXISTS`, so running it on every startup (and
//! on every `GET /init`) is safe. It never drops or alters existing data.

use sqlx::PgPool;
use tracing::info;

use crate::error::DbResult;

/// DDL for the single `productos` table.
///
/// `created_at`/`updated_at` default to the database clock at row-creation
/// time; `updated_at` is refreshed by the update statement, not a trigger.
const CREATE_PRODUCTOS: &str = r#"
CREATE TABLE IF NOT EXISTS productos (
    id SERIAL PRIMARY KEY,
    nombre VARCHAR(100) NOT NULL,
    descripcion TEXT,
    precio DECIMAL(10,2) NOT NULL,
    stock INTEGER DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Ensures the `productos` table exists.
///
/// ## Safety
/// - Idempotent: safe to call any number of times
/// - Never destructive: existing rows and columns are untouched
pub async fn ensure_schema(pool: &PgPool) -> DbResult<()> {
    sqlx::query(CREATE_PRODUCTOS).execute(pool).await?;

    info!("Tabla productos verificada");
    Ok(())
}

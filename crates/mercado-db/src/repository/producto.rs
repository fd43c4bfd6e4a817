//! # Product Repository
//!
//! Database operations for the `productos` table. Every public method is a
//! single parameterized statement; there are no transactions to manage and
//! no statement ever spans another.
//!
//! ## Opaque id handling
//! The HTTP path parameter is bound as text and cast in SQL (`$1::INT4`).
//! A non-numeric id therefore fails inside PostgreSQL and surfaces as a
//! storage error, the same way the rest of the statement's failures do.

use sqlx::PgPool;
use tracing::debug;

use crate::error::DbResult;
use mercado_core::{CambiosProducto, NuevoProducto, Producto};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductoRepository::new(pool);
///
/// let creado = repo.insert(&nuevo).await?;
/// let todos = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductoRepository {
    pool: PgPool,
}

impl ProductoRepository {
    /// Creates a new ProductoRepository.
    pub fn new(pool: PgPool) -> Self {
        ProductoRepository { pool }
    }

    /// Inserts one product and returns the stored row.
    ///
    /// `id`, `created_at` and `updated_at` come back from the database via
    /// `RETURNING` - the caller never fabricates them.
    pub async fn insert(&self, nuevo: &NuevoProducto) -> DbResult<Producto> {
        debug!(nombre = %nuevo.nombre, "Insertando producto");

        let producto = sqlx::query_as::<_, Producto>(
            r#"
            INSERT INTO productos (nombre, descripcion, precio, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nombre, descripcion, precio, stock, created_at, updated_at
            "#,
        )
        .bind(&nuevo.nombre)
        .bind(nuevo.descripcion.as_deref())
        .bind(nuevo.precio)
        .bind(nuevo.stock)
        .fetch_one(&self.pool)
        .await?;

        Ok(producto)
    }

    /// Returns every product ordered by ascending id.
    ///
    /// Unbounded by design: the service offers no pagination.
    pub async fn list(&self) -> DbResult<Vec<Producto>> {
        let productos = sqlx::query_as::<_, Producto>(
            r#"
            SELECT id, nombre, descripcion, precio, stock, created_at, updated_at
            FROM productos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(total = productos.len(), "Listado de productos");
        Ok(productos)
    }

    /// Gets a product by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Producto))` - row found
    /// * `Ok(None)` - no row matches
    pub async fn get(&self, id: &str) -> DbResult<Option<Producto>> {
        let producto = sqlx::query_as::<_, Producto>(
            r#"
            SELECT id, nombre, descripcion, precio, stock, created_at, updated_at
            FROM productos
            WHERE id = $1::INT4
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(producto)
    }

    /// Applies a partial update and returns the updated row.
    ///
    /// Each provided field replaces the stored value; each `None` is
    /// coalesced against the existing column, so omitted fields (and
    /// explicit JSON nulls) are preserved unchanged. `updated_at` is
    /// refreshed unconditionally, even for an empty change set.
    pub async fn update(&self, id: &str, cambios: &CambiosProducto) -> DbResult<Option<Producto>> {
        debug!(id = %id, "Actualizando producto");

        let producto = sqlx::query_as::<_, Producto>(
            r#"
            UPDATE productos
            SET nombre = COALESCE($1, nombre),
                descripcion = COALESCE($2, descripcion),
                precio = COALESCE($3, precio),
                stock = COALESCE($4, stock),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $5::INT4
            RETURNING id, nombre, descripcion, precio, stock, created_at, updated_at
            "#,
        )
        .bind(cambios.nombre.as_deref())
        .bind(cambios.descripcion.as_deref())
        .bind(cambios.precio)
        .bind(cambios.stock)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(producto)
    }

    /// Deletes a product and returns the removed row.
    ///
    /// ## Returns
    /// * `Ok(Some(Producto))` - row existed and was deleted
    /// * `Ok(None)` - no row matches
    pub async fn delete(&self, id: &str) -> DbResult<Option<Producto>> {
        debug!(id = %id, "Eliminando producto");

        let producto = sqlx::query_as::<_, Producto>(
            r#"
            DELETE FROM productos
            WHERE id = $1::INT4
            RETURNING id, nombre, descripcion, precio, stock, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(producto)
    }
}

//! # Domain Types
//!
//! Core types for the product catalog. Field names are Spanish because they
//! are both the column names in the `productos` table and the JSON keys of
//! the public API - one name end to end, no renaming layer.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Producto
// =============================================================================

/// A row of the `productos` table, and the JSON shape clients receive.
///
/// ## Dual Role
/// With the `sqlx` feature this derives `FromRow`, so every repository query
/// maps straight into it; `Serialize` then emits it verbatim on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Producto {
    /// Auto-assigned primary key (SERIAL). Immutable once created.
    pub id: i32,

    /// Display name. Never null.
    pub nombre: String,

    /// Optional free-text description.
    pub descripcion: Option<String>,

    /// Price as DECIMAL(10,2). Never null; serialized as a string, exactly
    /// like the numeric type comes off the PostgreSQL wire.
    pub precio: Decimal,

    /// Stock count. The service always writes a value (0 when omitted).
    pub stock: i32,

    /// Set once at insertion.
    pub created_at: NaiveDateTime,

    /// Set at insertion, refreshed on every successful update.
    pub updated_at: NaiveDateTime,
}

// =============================================================================
// NuevoProducto
// =============================================================================

/// Validated input for creating a product.
///
/// Built by [`crate::validation::validar_nuevo_producto`] - by the time a
/// value of this type exists, the required fields are known to be present.
#[derive(Debug, Clone)]
pub struct NuevoProducto {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: Decimal,
    /// Defaults to 0 when the client omits it.
    pub stock: i32,
}

// =============================================================================
// CambiosProducto
// =============================================================================

/// Partial update for a product. Every field is optional.
///
/// `None` means "preserve the stored value". An explicit JSON `null` also
/// deserializes to `None`, so null and omitted are indistinguishable - the
/// repository coalesces both against the existing row. This is deliberate
/// behavior, not an accident of serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CambiosProducto {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<Decimal>,
    pub stock: Option<i32>,
}

impl CambiosProducto {
    /// True when no field carries a value.
    ///
    /// An empty change set is still a valid update: the repository refreshes
    /// `updated_at` regardless of which fields changed.
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.descripcion.is_none()
            && self.precio.is_none()
            && self.stock.is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cambios_null_equals_omitted() {
        // Explicit null and omitted field must produce the same change set.
        let explicit: CambiosProducto =
            serde_json::from_str(r#"{"nombre":null,"precio":null}"#).unwrap();
        let omitted: CambiosProducto = serde_json::from_str("{}").unwrap();

        assert!(explicit.nombre.is_none());
        assert!(explicit.precio.is_none());
        assert!(explicit.is_empty());
        assert!(omitted.is_empty());
    }

    #[test]
    fn test_cambios_partial_body() {
        let cambios: CambiosProducto = serde_json::from_str(r#"{"stock":5}"#).unwrap();
        assert_eq!(cambios.stock, Some(5));
        assert!(cambios.nombre.is_none());
        assert!(cambios.precio.is_none());
        assert!(!cambios.is_empty());
    }

    #[test]
    fn test_precio_accepts_json_number_and_string() {
        let a: CambiosProducto = serde_json::from_str(r#"{"precio":9.99}"#).unwrap();
        let b: CambiosProducto = serde_json::from_str(r#"{"precio":"9.99"}"#).unwrap();
        assert_eq!(a.precio, b.precio);
        assert_eq!(a.precio.unwrap().to_string(), "9.99");
    }

    #[test]
    fn test_producto_serializes_spanish_keys() {
        let producto = Producto {
            id: 1,
            nombre: "Widget".to_string(),
            descripcion: None,
            precio: Decimal::new(999, 2),
            stock: 0,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        };

        let json = serde_json::to_value(&producto).unwrap();
        assert_eq!(json["nombre"], "Widget");
        assert_eq!(json["descripcion"], serde_json::Value::Null);
        assert_eq!(json["precio"], "9.99");
        assert_eq!(json["stock"], 0);
    }
}

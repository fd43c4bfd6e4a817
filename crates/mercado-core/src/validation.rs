//! # Validation Module
//!
//! Required-field checks for product creation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Layer 1: serde              - type checks (number vs string)   │
//! │  Layer 2: THIS MODULE        - presence of required fields      │
//! │  Layer 3: PostgreSQL         - NOT NULL / type constraints      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Presence checks only: a negative `precio` or `stock` passes through here
//! and lands in the table. Anything the database rejects comes back as a
//! storage error, not a validation error.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::NuevoProducto;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Builds a [`NuevoProducto`] from the optional fields of a create request.
///
/// ## Rules
/// - `nombre` must be present and non-empty
/// - `precio` must be present
/// - `descripcion` stays optional, `stock` defaults to 0
///
/// ## Example
/// ```rust
/// use mercado_core::validation::validar_nuevo_producto;
/// use rust_decimal::Decimal;
///
/// let nuevo = validar_nuevo_producto(
///     Some("Widget".to_string()),
///     None,
///     Some(Decimal::new(999, 2)),
///     None,
/// )
/// .unwrap();
/// assert_eq!(nuevo.stock, 0);
///
/// assert!(validar_nuevo_producto(None, None, None, None).is_err());
/// ```
pub fn validar_nuevo_producto(
    nombre: Option<String>,
    descripcion: Option<String>,
    precio: Option<Decimal>,
    stock: Option<i32>,
) -> ValidationResult<NuevoProducto> {
    let nombre = match nombre {
        Some(n) if !n.is_empty() => n,
        _ => return Err(ValidationError::CamposObligatorios),
    };

    let precio = precio.ok_or(ValidationError::CamposObligatorios)?;

    Ok(NuevoProducto {
        nombre,
        descripcion,
        precio,
        stock: stock.unwrap_or(0),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn precio() -> Option<Decimal> {
        Some(Decimal::new(999, 2))
    }

    #[test]
    fn test_valid_input() {
        let nuevo = validar_nuevo_producto(
            Some("Widget".to_string()),
            Some("desc".to_string()),
            precio(),
            Some(5),
        )
        .unwrap();

        assert_eq!(nuevo.nombre, "Widget");
        assert_eq!(nuevo.descripcion.as_deref(), Some("desc"));
        assert_eq!(nuevo.stock, 5);
    }

    #[test]
    fn test_stock_defaults_to_zero() {
        let nuevo =
            validar_nuevo_producto(Some("Widget".to_string()), None, precio(), None).unwrap();
        assert_eq!(nuevo.stock, 0);
        assert!(nuevo.descripcion.is_none());
    }

    #[test]
    fn test_missing_nombre_rejected() {
        let err = validar_nuevo_producto(None, None, precio(), None).unwrap_err();
        assert_eq!(err, ValidationError::CamposObligatorios);
        assert_eq!(
            err.to_string(),
            "Los campos nombre y precio son obligatorios"
        );
    }

    #[test]
    fn test_empty_nombre_rejected() {
        assert!(validar_nuevo_producto(Some(String::new()), None, precio(), None).is_err());
    }

    #[test]
    fn test_missing_precio_rejected() {
        assert!(validar_nuevo_producto(Some("Widget".to_string()), None, None, None).is_err());
    }

    #[test]
    fn test_negative_values_pass_presence_check() {
        // No range validation here: the database is the judge of these.
        let nuevo = validar_nuevo_producto(
            Some("Widget".to_string()),
            None,
            Some(Decimal::new(-100, 2)),
            Some(-3),
        )
        .unwrap();
        assert!(nuevo.precio.is_sign_negative());
        assert_eq!(nuevo.stock, -3);
    }
}

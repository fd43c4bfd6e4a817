//! # mercado-core: Pure Domain Types for Mercado
//!
//! This crate holds the domain model of the product catalog and the input
//! validation that runs before anything touches the database.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Mercado Architecture                        │
//! │                                                                 │
//! │   HTTP handler (apps/api)                                       │
//! │        │  deserializes body, calls validation                   │
//! │        ▼                                                        │
//! │   ★ mercado-core (THIS CRATE) ★                                 │
//! │   Producto / NuevoProducto / CambiosProducto / validation       │
//! │        │                                                        │
//! │        ▼                                                        │
//! │   mercado-db (repositories, PostgreSQL)                         │
//! │                                                                 │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (`Producto` and its input forms)
//! - [`error`] - Validation error type
//! - [`validation`] - Required-field checks for product creation

pub mod error;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use types::{CambiosProducto, NuevoProducto, Producto};

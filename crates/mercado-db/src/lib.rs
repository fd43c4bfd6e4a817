//! # mercado-db: Database Layer for Mercado
//!
//! PostgreSQL access for the product catalog: connection pool, schema
//! initialization, and the product repository.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  HTTP handler (apps/api)                                        │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 mercado-db (THIS CRATE)                   │  │
//! │  │                                                           │  │
//! │  │   Database (pool.rs)   ProductoRepository   Schema        │  │
//! │  │   PgPool, lazy connect (repository/)        (schema.rs)   │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  PostgreSQL - single table `productos`                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Idempotent `productos` table initialization
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mercado_db::{Database, DbConfig};
//!
//! let config = DbConfig::new("localhost", 5432, "admin", "admin123", "entidad_db");
//! let db = Database::connect(&config);
//!
//! db.ensure_schema().await?;
//! let productos = db.productos().list().await?;
//! ```

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::producto::ProductoRepository;

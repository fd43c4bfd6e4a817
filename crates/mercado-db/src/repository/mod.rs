//! # Repositories
//!
//! One module per entity. The catalog has a single entity, so there is a
//! single repository.

pub mod producto;

pub use producto::ProductoRepository;

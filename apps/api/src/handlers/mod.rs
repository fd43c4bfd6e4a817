//! # HTTP Handlers
//!
//! One module per surface: [`meta`] for the service endpoints (root,
//! health, init) and [`producto`] for the CRUD routes.

pub mod meta;
pub mod producto;

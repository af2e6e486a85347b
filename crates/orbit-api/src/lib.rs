//! Orbit backend — HTTP API library.
//!
//! Exposes the route modules and shared state so integration tests can
//! build the same router as the server binary.

pub mod error;
pub mod routes;
pub mod state;

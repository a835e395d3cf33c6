//! Student API server library.
//!
//! Exposes the building blocks (config, state, decoding, error handling,
//! routes, router) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod decode;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

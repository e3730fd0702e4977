//! Noteful API server library.
//!
//! Exposes the building blocks (config, state, error handling, the
//! generic resource router) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod resource;
pub mod routes;
pub mod state;

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is an explicit dependency injected at construction, never a
/// process-wide singleton, so tests can run each router against its own
/// database. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: noteful_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

//! HTTP server assembly.

pub mod handlers;
pub mod response;

pub use handlers::ExecuteRequest;
pub use response::{ApiResponse, ResponseData};

use crate::config::ServerConfig;
use crate::database::SqliteExecutor;
use crate::security::QueryGate;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Shared per-process state. Immutable after construction; requests hold it
/// behind an `Arc` and never lock.
pub struct AppState {
    pub config: ServerConfig,
    pub gate: QueryGate,
    pub executor: SqliteExecutor,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let gate = QueryGate::new().row_limit(config.security.row_limit);
        let executor = SqliteExecutor::new(&config.database.path);
        Self {
            config,
            gate,
            executor,
        }
    }
}

/// Build the playground router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/schema", get(handlers::api_schema))
        .route("/api/execute", post(handlers::api_execute))
        .route("/api/samples", get(handlers::api_samples))
        .with_state(state)
}

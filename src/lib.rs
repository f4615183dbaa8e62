//! Web playground for running SQL against a seeded SQLite database.
//!
//! Submitted queries optionally pass through a safe-mode gate that blocks
//! write statements, rejects multi-statement input, and injects a row limit
//! before execution. Query results, schema introspection, and a catalog of
//! sample queries are served as JSON over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use sql_playground::config::ServerConfig;
//! use sql_playground::database::seed_if_missing;
//! use sql_playground::server::{router, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::builder().from_env()?.build()?;
//!     seed_if_missing(&config.database.path, &config.database.seed_path)?;
//!
//!     let bind = config.bind;
//!     let state = Arc::new(AppState::new(config));
//!     let listener = tokio::net::TcpListener::bind(bind).await?;
//!     axum::serve(listener, router(state)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod samples;
pub mod security;
pub mod server;

pub use config::{DatabaseConfig, SecurityConfig, ServerConfig, ServerConfigBuilder};
pub use database::{ColumnInfo, QueryOutcome, SqliteExecutor};
pub use error::{ConfigError, DatabaseError, RejectReason, Result, ServerError};
pub use security::{GateDecision, QueryGate};
pub use server::{router, ApiResponse, AppState};

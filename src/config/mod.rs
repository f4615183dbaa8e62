//! Configuration types and builders.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Database file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite file. Created from the seed script if absent.
    pub path: PathBuf,
    /// Path of the SQL script used to seed a missing database.
    pub seed_path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "sql_agent_class.db".into(),
            seed_path: "sql_agent_seed.sql".into(),
        }
    }
}

/// Safe-mode policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Row cap injected into safe-mode queries that carry no LIMIT clause.
    pub row_limit: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self { row_limit: 100 }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            database: DatabaseConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig with fluent API.
#[derive(Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, bind: SocketAddr) -> Self {
        self.config.bind = bind;
        self
    }

    pub fn database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.database.path = path.into();
        self
    }

    pub fn seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.database.seed_path = path.into();
        self
    }

    pub fn row_limit(mut self, limit: u32) -> Self {
        self.config.security.row_limit = limit;
        self
    }

    /// Build from environment variables.
    pub fn from_env(mut self) -> Result<Self> {
        if let Ok(bind) = env::var("PLAYGROUND_BIND") {
            self.config.bind = bind.parse().map_err(|_| ConfigError::InvalidValue {
                field: "PLAYGROUND_BIND".into(),
                message: format!("Invalid socket address: {}", bind).into(),
            })?;
        }

        if let Ok(path) = env::var("PLAYGROUND_DB_PATH") {
            self.config.database.path = path.into();
        }

        if let Ok(path) = env::var("PLAYGROUND_SEED_PATH") {
            self.config.database.seed_path = path.into();
        }

        if let Ok(limit) = env::var("PLAYGROUND_ROW_LIMIT") {
            self.config.security.row_limit =
                limit.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "PLAYGROUND_ROW_LIMIT".into(),
                    message: "Invalid row limit".into(),
                })?;
        }

        Ok(self)
    }

    pub fn build(self) -> Result<ServerConfig> {
        self.validate()?;
        Ok(self.config)
    }

    fn validate(&self) -> Result<()> {
        if self.config.database.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("database.path".into()).into());
        }
        if self.config.database.seed_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("database.seed_path".into()).into());
        }
        if self.config.security.row_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "row_limit".into(),
                message: "Row limit must be greater than 0".into(),
            }
            .into());
        }
        Ok(())
    }
}

//! SQLite access layer.
//!
//! Every operation opens its own connection against the configured database
//! file and closes it before returning. There is no pooling and no shared
//! connection state between requests; cross-request consistency is left to
//! SQLite's own locking.

pub mod executor;
pub mod schema;
pub mod seed;

pub use executor::{QueryOutcome, SqliteExecutor};
pub use schema::ColumnInfo;
pub use seed::seed_if_missing;

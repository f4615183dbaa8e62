//! Per-request SQL execution.

use crate::error::{DatabaseError, DbResult};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of a successful execution.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// A result set: column names plus rows of JSON scalars, in query order.
    Rows {
        columns: Vec<String>,
        rows: Vec<Vec<JsonValue>>,
    },
    /// Number of rows changed by a write statement.
    Affected(usize),
}

/// Executes SQL text against the configured database file.
///
/// Constructed with an explicit path rather than reading a process-wide
/// default, so tests and callers control exactly which file is touched.
#[derive(Debug, Clone)]
pub struct SqliteExecutor {
    db_path: PathBuf,
}

impl SqliteExecutor {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn open(&self) -> DbResult<Connection> {
        Connection::open(&self.db_path).map_err(|e| DatabaseError::OpenFailed {
            path: self.db_path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Execute SQL text once.
    ///
    /// Text whose first token is `SELECT` is fetched in full; anything else
    /// runs as a write and reports its affected-row count. Any SQLite error
    /// surfaces as [`DatabaseError::ExecutionFailed`] with the underlying
    /// message intact. No retries, no partial results: a failure mid-fetch
    /// fails the whole call.
    pub fn execute(&self, sql: &str) -> DbResult<QueryOutcome> {
        let conn = self.open()?;

        if sql.trim().to_uppercase().starts_with("SELECT") {
            fetch_rows(&conn, sql)
        } else {
            let affected = conn
                .execute(sql, [])
                .map_err(|e| DatabaseError::ExecutionFailed(e.to_string()))?;
            debug!(affected, "write statement executed");
            Ok(QueryOutcome::Affected(affected))
        }
    }
}

fn fetch_rows(conn: &Connection, sql: &str) -> DbResult<QueryOutcome> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| DatabaseError::ExecutionFailed(e.to_string()))?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let column_count = columns.len();

    let mut rows: Vec<Vec<JsonValue>> = Vec::new();
    let mut raw_rows = stmt
        .query([])
        .map_err(|e| DatabaseError::ExecutionFailed(e.to_string()))?;
    loop {
        let row = match raw_rows.next() {
            Ok(Some(row)) => row,
            Ok(None) => break,
            Err(e) => return Err(DatabaseError::ExecutionFailed(e.to_string())),
        };
        let mut values = Vec::with_capacity(column_count);
        for i in 0..column_count {
            values.push(cell_to_json(row, i));
        }
        rows.push(values);
    }

    debug!(row_count = rows.len(), "rows fetched");
    Ok(QueryOutcome::Rows { columns, rows })
}

fn cell_to_json(row: &rusqlite::Row<'_>, idx: usize) -> JsonValue {
    match row.get_ref(idx) {
        Ok(ValueRef::Null) => JsonValue::Null,
        Ok(ValueRef::Integer(i)) => JsonValue::Number(i.into()),
        Ok(ValueRef::Real(f)) => serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Ok(ValueRef::Text(bytes)) => JsonValue::String(String::from_utf8_lossy(bytes).into_owned()),
        Ok(ValueRef::Blob(_)) => JsonValue::Null,
        Err(_) => JsonValue::Null,
    }
}

//! Schema introspection over SQLite metadata.

use crate::database::SqliteExecutor;
use crate::error::{DatabaseError, DbResult};
use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeMap;

/// Column descriptor as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

impl SqliteExecutor {
    /// List every user table with its column metadata, keyed by table name.
    ///
    /// SQLite-internal tables (`sqlite_` prefix) are skipped.
    pub fn introspect(&self) -> DbResult<BTreeMap<String, Vec<ColumnInfo>>> {
        let conn =
            Connection::open(self.db_path()).map_err(|e| DatabaseError::OpenFailed {
                path: self.db_path().display().to_string(),
                message: e.to_string(),
            })?;

        let mut schema = BTreeMap::new();
        for table in list_tables(&conn)? {
            if table.starts_with("sqlite_") {
                continue;
            }
            let columns = table_columns(&conn, &table)?;
            schema.insert(table, columns);
        }
        Ok(schema)
    }
}

fn list_tables(conn: &Connection) -> DbResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .map_err(|e| DatabaseError::IntrospectionFailed(e.to_string()))?;
    let tables = stmt
        .query_map([], |row| row.get(0))
        .map_err(|e| DatabaseError::IntrospectionFailed(e.to_string()))?
        .collect::<rusqlite::Result<Vec<String>>>()
        .map_err(|e| DatabaseError::IntrospectionFailed(e.to_string()))?;
    Ok(tables)
}

fn table_columns(conn: &Connection, table: &str) -> DbResult<Vec<ColumnInfo>> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .map_err(|e| DatabaseError::IntrospectionFailed(e.to_string()))?;
    let columns = stmt
        .query_map([], |row| {
            Ok(ColumnInfo {
                name: row.get(1)?,
                data_type: row.get(2)?,
                not_null: row.get::<_, i64>(3)? != 0,
                primary_key: row.get::<_, i64>(5)? != 0,
            })
        })
        .map_err(|e| DatabaseError::IntrospectionFailed(e.to_string()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| DatabaseError::IntrospectionFailed(e.to_string()))?;
    Ok(columns)
}

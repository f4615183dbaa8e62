//! First-run database seeding.

use crate::error::{DatabaseError, DbResult};
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

/// Create and seed the database file if it does not exist yet.
///
/// Runs the whole seed script in one batch, mirroring a first-run setup.
/// Returns `true` when the database was created, `false` when it already
/// existed (the file is then left untouched).
pub fn seed_if_missing(db_path: &Path, seed_path: &Path) -> DbResult<bool> {
    if db_path.exists() {
        info!(path = %db_path.display(), "database already exists");
        return Ok(false);
    }

    let script = std::fs::read_to_string(seed_path)
        .map_err(|_| DatabaseError::SeedScriptMissing(seed_path.display().to_string()))?;

    let conn = Connection::open(db_path).map_err(|e| DatabaseError::OpenFailed {
        path: db_path.display().to_string(),
        message: e.to_string(),
    })?;
    conn.execute_batch(&script)
        .map_err(|e| DatabaseError::SeedFailed(e.to_string()))?;

    info!(path = %db_path.display(), "database created and seeded");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::SqliteExecutor;

    #[test]
    fn test_seeds_missing_database() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("app.db");
        let seed_path = tmp.path().join("seed.sql");
        std::fs::write(
            &seed_path,
            "CREATE TABLE customers (id INTEGER PRIMARY KEY, name TEXT);\n\
             INSERT INTO customers VALUES (1, 'alice');",
        )
        .unwrap();

        assert!(seed_if_missing(&db_path, &seed_path).unwrap());
        assert!(db_path.exists());

        let executor = SqliteExecutor::new(&db_path);
        let outcome = executor.execute("SELECT name FROM customers").unwrap();
        match outcome {
            crate::database::QueryOutcome::Rows { rows, .. } => assert_eq!(rows.len(), 1),
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn test_existing_database_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("app.db");
        let seed_path = tmp.path().join("seed.sql");
        std::fs::write(&seed_path, "CREATE TABLE t (id INTEGER);").unwrap();

        assert!(seed_if_missing(&db_path, &seed_path).unwrap());
        assert!(!seed_if_missing(&db_path, &seed_path).unwrap());
    }

    #[test]
    fn test_missing_seed_script_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("app.db");
        let seed_path = tmp.path().join("nope.sql");

        let err = seed_if_missing(&db_path, &seed_path).unwrap_err();
        assert!(matches!(err, DatabaseError::SeedScriptMissing(_)));
    }

    #[test]
    fn test_broken_seed_script_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("app.db");
        let seed_path = tmp.path().join("seed.sql");
        std::fs::write(&seed_path, "CREATE TABEL t (id INTEGER);").unwrap();

        let err = seed_if_missing(&db_path, &seed_path).unwrap_err();
        assert!(matches!(err, DatabaseError::SeedFailed(_)));
    }
}

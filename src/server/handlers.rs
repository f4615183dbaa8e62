//! HTTP handlers for the playground API.

use crate::database::ColumnInfo;
use crate::samples::{self, SampleCatalog};
use crate::security::GateDecision;
use crate::server::response::ApiResponse;
use crate::server::AppState;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

const INDEX_HTML: &str = include_str!("index.html");

/// Body of `POST /api/execute`.
#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub sql: String,
    /// Anything other than `"safe"` disables the gate. Defaults to safe.
    #[serde(default = "default_security_level")]
    pub security_level: String,
}

fn default_security_level() -> String {
    "safe".into()
}

/// Response of `GET /api/schema`. Failures keep the original flat
/// `{"error": ...}` shape rather than an HTTP error status.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SchemaResponse {
    Schema(BTreeMap<String, Vec<ColumnInfo>>),
    Error { error: String },
}

/// `GET /` — the static playground page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /api/schema` — table and column metadata.
pub async fn api_schema(State(state): State<Arc<AppState>>) -> Json<SchemaResponse> {
    let executor = state.executor.clone();
    let result = tokio::task::spawn_blocking(move || executor.introspect()).await;
    match result {
        Ok(Ok(schema)) => Json(SchemaResponse::Schema(schema)),
        Ok(Err(e)) => {
            warn!(%e, "schema introspection failed");
            Json(SchemaResponse::Error {
                error: e.to_string(),
            })
        }
        Err(e) => {
            error!(%e, "schema task join error");
            Json(SchemaResponse::Error {
                error: e.to_string(),
            })
        }
    }
}

/// `POST /api/execute` — gate, execute, normalize.
///
/// Every outcome is a 200 with the [`ApiResponse`] envelope; empty input and
/// gate rejections return before any database file is touched.
pub async fn api_execute(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExecuteRequest>,
) -> Json<ApiResponse> {
    if request.sql.trim().is_empty() {
        return Json(ApiResponse::empty_query());
    }

    let safe_mode = request.security_level == "safe";
    debug!(safe_mode, sql = %sql_preview(&request.sql), "execute request");

    let final_sql = match state.gate.evaluate(&request.sql, safe_mode) {
        GateDecision::Allow(sql) => sql,
        GateDecision::Reject(reason) => return Json(ApiResponse::rejected(reason)),
    };

    let executor = state.executor.clone();
    let result = tokio::task::spawn_blocking(move || executor.execute(&final_sql)).await;
    match result {
        Ok(Ok(outcome)) => Json(ApiResponse::from_outcome(outcome)),
        Ok(Err(e)) => {
            warn!(%e, "query execution failed");
            Json(ApiResponse::execution_failed(e.to_string()))
        }
        Err(e) => {
            error!(%e, "execute task join error");
            Json(ApiResponse::execution_failed(e.to_string()))
        }
    }
}

/// `GET /api/samples` — the static sample-query catalog.
pub async fn api_samples() -> Json<&'static SampleCatalog> {
    Json(&samples::CATALOG)
}

fn sql_preview(sql: &str) -> &str {
    const LIMIT: usize = 120;
    match sql.char_indices().nth(LIMIT) {
        Some((idx, _)) => &sql[..idx],
        None => sql,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::database::SqliteExecutor;

    fn state_in(dir: &tempfile::TempDir) -> Arc<AppState> {
        let config = ServerConfig::builder()
            .database_path(dir.path().join("app.db"))
            .seed_path(dir.path().join("seed.sql"))
            .build()
            .unwrap();
        Arc::new(AppState::new(config))
    }

    fn seed(dir: &tempfile::TempDir) {
        let executor = SqliteExecutor::new(dir.path().join("app.db"));
        executor
            .execute("CREATE TABLE customers (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
            .unwrap();
        executor
            .execute("INSERT INTO customers (id, name) VALUES (1, 'alice'), (2, 'bob')")
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_sql_short_circuits_without_store_access() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_in(&tmp);

        let Json(body) = api_execute(
            State(Arc::clone(&state)),
            Json(ExecuteRequest {
                sql: "   ".into(),
                security_level: "safe".into(),
            }),
        )
        .await;

        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Empty query"));
        // The database file must not even have been created.
        assert!(!tmp.path().join("app.db").exists());
    }

    #[tokio::test]
    async fn test_dangerous_sql_rejected_without_store_access() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_in(&tmp);

        let Json(body) = api_execute(
            State(state),
            Json(ExecuteRequest {
                sql: "DROP TABLE products".into(),
                security_level: "safe".into(),
            }),
        )
        .await;

        assert!(!body.success);
        assert_eq!(
            body.error.as_deref(),
            Some("Dangerous operations not allowed in safe mode")
        );
        assert!(!tmp.path().join("app.db").exists());
    }

    #[tokio::test]
    async fn test_select_pipeline_end_to_end() {
        let tmp = tempfile::tempdir().unwrap();
        seed(&tmp);
        let state = state_in(&tmp);

        let Json(body) = api_execute(
            State(state),
            Json(ExecuteRequest {
                sql: "SELECT id, name FROM customers ORDER BY id".into(),
                security_level: "safe".into(),
            }),
        )
        .await;

        assert!(body.success);
        assert_eq!(
            body.message.as_deref(),
            Some("Query executed successfully - 2 rows returned")
        );
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["data"]["columns"], serde_json::json!(["id", "name"]));
        assert_eq!(value["data"]["rows"][0], serde_json::json!([1, "alice"]));
    }

    #[tokio::test]
    async fn test_unsafe_write_reports_affected_rows() {
        let tmp = tempfile::tempdir().unwrap();
        seed(&tmp);
        let state = state_in(&tmp);

        let Json(body) = api_execute(
            State(state),
            Json(ExecuteRequest {
                sql: "DELETE FROM customers WHERE id = 1".into(),
                security_level: "unsafe".into(),
            }),
        )
        .await;

        assert!(body.success);
        assert_eq!(
            body.message.as_deref(),
            Some("Query executed - 1 rows affected")
        );
    }

    #[tokio::test]
    async fn test_execution_failure_is_normalized() {
        let tmp = tempfile::tempdir().unwrap();
        seed(&tmp);
        let state = state_in(&tmp);

        let Json(body) = api_execute(
            State(state),
            Json(ExecuteRequest {
                sql: "SELECT * FROM missing".into(),
                security_level: "safe".into(),
            }),
        )
        .await;

        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("SQL execution failed"));
        assert!(body.error.unwrap().contains("missing"));
    }

    #[tokio::test]
    async fn test_schema_endpoint() {
        let tmp = tempfile::tempdir().unwrap();
        seed(&tmp);
        let state = state_in(&tmp);

        let Json(response) = api_schema(State(state)).await;
        match response {
            SchemaResponse::Schema(schema) => {
                let columns = &schema["customers"];
                assert_eq!(columns[0].name, "id");
                assert!(columns[0].primary_key);
            }
            SchemaResponse::Error { error } => panic!("unexpected error: {error}"),
        }
    }

    #[test]
    fn test_security_level_defaults_to_safe() {
        let request: ExecuteRequest = serde_json::from_str(r#"{"sql": "SELECT 1"}"#).unwrap();
        assert_eq!(request.security_level, "safe");
    }

    #[tokio::test]
    async fn test_samples_endpoint() {
        let Json(catalog) = api_samples().await;
        assert_eq!(catalog.basic[0].name, "All Customers");
        assert_eq!(catalog.dangerous.len(), 2);
    }
}

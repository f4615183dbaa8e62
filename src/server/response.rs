//! Uniform JSON response shaping.
//!
//! Every outcome of the execute pipeline — gate rejection, execution
//! failure, rows, affected count — maps onto one envelope so the client
//! never sees a raw fault.

use crate::database::QueryOutcome;
use crate::error::RejectReason;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// The response envelope for `/api/execute`.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Payload for successful executions.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Rows {
        columns: Vec<String>,
        rows: Vec<Vec<JsonValue>>,
    },
    Affected {
        affected_rows: usize,
    },
}

impl ApiResponse {
    pub fn from_outcome(outcome: QueryOutcome) -> Self {
        match outcome {
            QueryOutcome::Rows { columns, rows } => {
                let row_count = rows.len();
                Self {
                    success: true,
                    data: Some(ResponseData::Rows { columns, rows }),
                    error: None,
                    message: Some(format!(
                        "Query executed successfully - {} rows returned",
                        row_count
                    )),
                }
            }
            QueryOutcome::Affected(affected) => Self {
                success: true,
                data: Some(ResponseData::Affected {
                    affected_rows: affected,
                }),
                error: None,
                message: Some(format!("Query executed - {} rows affected", affected)),
            },
        }
    }

    pub fn rejected(reason: RejectReason) -> Self {
        let message = match reason {
            RejectReason::DangerousKeyword => "Only SELECT queries are permitted",
            RejectReason::MultipleStatements => "Only single SELECT statements permitted",
        };
        Self {
            success: false,
            data: None,
            error: Some(reason.to_string()),
            message: Some(message.into()),
        }
    }

    pub fn execution_failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: Some("SQL execution failed".into()),
        }
    }

    pub fn empty_query() -> Self {
        Self {
            success: false,
            data: None,
            error: Some("Empty query".into()),
            message: Some("Please enter a SQL query".into()),
        }
    }
}

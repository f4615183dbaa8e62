//! SQL safety gate.
//!
//! Screens queries submitted in safe mode: blocks statements containing
//! write keywords, rejects multi-statement input, and injects a row limit
//! when none is present. The checks are purely syntactic; the gate does not
//! parse SQL, so comments or unusual statement terminators can slip past
//! the keyword scan. That is a known limitation of this screening approach.

use crate::error::RejectReason;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Whole-word scan for statements that modify data or schema.
///
/// Word boundaries matter: a column named `updated_at` must not trip the
/// UPDATE check.
static DANGEROUS_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(INSERT|UPDATE|DELETE|DROP|TRUNCATE|ALTER|CREATE|REPLACE)\b")
        .expect("Invalid regex: dangerous keyword pattern")
});

/// Detects an existing `LIMIT <n>` clause.
static LIMIT_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\blimit\s+\d+\b").expect("Invalid regex: limit clause pattern"));

/// Outcome of gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Execute this text, possibly rewritten with a row limit.
    Allow(String),
    /// Refuse with a typed reason; nothing reaches the database.
    Reject(RejectReason),
}

/// The safe-mode query gate.
#[derive(Debug, Clone)]
pub struct QueryGate {
    row_limit: u32,
}

impl Default for QueryGate {
    fn default() -> Self {
        Self { row_limit: 100 }
    }
}

impl QueryGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row cap appended to safe-mode queries without a LIMIT clause.
    pub fn row_limit(mut self, limit: u32) -> Self {
        self.row_limit = limit;
        self
    }

    /// Evaluate a query against the safe-mode policy.
    ///
    /// With `safe_mode` off the input passes through verbatim, write
    /// statements included. With it on, the text is trimmed, a single
    /// trailing semicolon is tolerated, and the query must be a single
    /// statement free of write keywords; a row limit is appended when the
    /// text has none.
    pub fn evaluate(&self, raw_sql: &str, safe_mode: bool) -> GateDecision {
        if !safe_mode {
            return GateDecision::Allow(raw_sql.to_string());
        }

        let trimmed = raw_sql.trim();
        let sql = match trimmed.strip_suffix(';') {
            Some(stripped) => stripped.trim_end(),
            None => trimmed,
        };

        if let Some(found) = DANGEROUS_KEYWORDS.find(sql) {
            warn!(keyword = found.as_str(), "dangerous keyword blocked");
            return GateDecision::Reject(RejectReason::DangerousKeyword);
        }

        if sql.contains(';') {
            warn!("multi-statement query blocked");
            return GateDecision::Reject(RejectReason::MultipleStatements);
        }

        if LIMIT_CLAUSE.is_match(sql) {
            GateDecision::Allow(sql.to_string())
        } else {
            debug!(limit = self.row_limit, "injecting row limit");
            GateDecision::Allow(format!("{} LIMIT {}", sql, self.row_limit))
        }
    }
}

// LogsView - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary across all layers and the shape
// handed to whatever renders the results (CLI, admin page, JSON consumer).
// None of them are persisted; each is rebuilt on every service call.

use serde::Serialize;

// =============================================================================
// Log Entry (output of parsing)
// =============================================================================

/// A single parsed log record, possibly spanning several physical lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Timestamp exactly as written in the file (`YYYY-MM-DD HH:MM:SS`).
    pub timestamp: String,

    /// Level token, upper-cased (INFO, WARN, ERROR, ...).
    pub level: String,

    /// Message text, trimmed. Continuation lines are kept, joined by `\n`.
    pub message: String,

    /// Client IP from an `| IP: ...` segment.
    pub ip: Option<String>,

    /// HTTP method from a `| GET /path` segment.
    pub method: Option<String>,

    /// URL or path following the method.
    pub url: Option<String>,

    /// Payload following `| Context:`.
    pub context: Option<LogContext>,
}

/// Context payload attached to an entry.
///
/// Serialised untagged so a structured context renders as the JSON it was
/// decoded from and a raw one renders as a plain string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogContext {
    /// The context text was valid, non-null JSON.
    Structured(serde_json::Value),

    /// The context text as written.
    Raw(String),
}

impl LogContext {
    /// Decode context text: JSON if it parses to a non-null value, else raw.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(value) if !value.is_null() => Self::Structured(value),
            _ => Self::Raw(text.to_string()),
        }
    }
}

impl std::fmt::Display for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structured(value) => write!(f, "{value}"),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

// =============================================================================
// Log File Info (output of listing)
// =============================================================================

/// Metadata snapshot of one log file in the logs directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogFileInfo {
    /// File name only, never a path.
    pub name: String,

    /// Size in bytes.
    pub size: u64,

    /// Human-readable size, e.g. "1.5 KB".
    pub size_formatted: String,

    /// Modification time as `YYYY-MM-DD HH:MM:SS` local time, empty if unknown.
    pub modified: String,

    /// Modification time in epoch seconds, 0 if unknown.
    pub modified_timestamp: i64,
}

// =============================================================================
// Service results
// =============================================================================

/// Result of a content retrieval request.
///
/// Failures are reported through `error` with empty `entries`; they are
/// never raised to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentResult {
    /// Filtered, limited entries, newest first.
    pub entries: Vec<LogEntry>,

    /// Number of entries in the whole unfiltered file. Not `entries.len()`.
    pub total_lines: usize,

    /// Basename of the file that was read, `None` on failure.
    pub file: Option<String>,

    /// Human-readable failure description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContentResult {
    /// The reported-error shape: no entries, no file, a message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            total_lines: 0,
            file: None,
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of a delete request (single file or bulk).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionResult {
    pub success: bool,

    pub message: String,

    /// Bulk only: number of files removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<usize>,

    /// Bulk only: number of files listed when the bulk delete started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,

    /// Bulk only: names of files that could not be removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl DeletionResult {
    /// Single-file outcome.
    pub fn single(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            deleted: None,
            total: None,
            errors: None,
        }
    }

    /// Bulk outcome. Success means at least one file was removed.
    pub fn bulk(deleted: usize, total: usize, errors: Vec<String>) -> Self {
        let message = if deleted > 0 {
            format!("Deleted {deleted} of {total} files")
        } else {
            "Failed to delete log files".to_string()
        };
        Self {
            success: deleted > 0,
            message,
            deleted: Some(deleted),
            total: Some(total),
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_json_object_is_structured() {
        let ctx = LogContext::from_text(r#"{"user":42}"#);
        assert_eq!(
            ctx,
            LogContext::Structured(serde_json::json!({ "user": 42 }))
        );
    }

    #[test]
    fn test_context_null_and_invalid_json_stay_raw() {
        assert_eq!(
            LogContext::from_text("null"),
            LogContext::Raw("null".to_string())
        );
        assert_eq!(
            LogContext::from_text("user=42"),
            LogContext::Raw("user=42".to_string())
        );
    }

    #[test]
    fn test_context_serialises_untagged() {
        let structured = LogContext::Structured(serde_json::json!([1, 2]));
        let raw = LogContext::Raw("plain".to_string());
        assert_eq!(serde_json::to_string(&structured).unwrap(), "[1,2]");
        assert_eq!(serde_json::to_string(&raw).unwrap(), "\"plain\"");
    }

    #[test]
    fn test_bulk_result_success_requires_one_deletion() {
        let none = DeletionResult::bulk(0, 2, vec!["a.log".into(), "b.log".into()]);
        assert!(!none.success);

        let some = DeletionResult::bulk(2, 3, vec!["c.log".into()]);
        assert!(some.success);
        assert_eq!(some.message, "Deleted 2 of 3 files");
        assert_eq!(some.errors.as_deref(), Some(&["c.log".to_string()][..]));
    }

    #[test]
    fn test_failed_content_result_shape() {
        let result = ContentResult::failed("nope");
        assert!(result.is_error());
        assert!(result.entries.is_empty());
        assert_eq!(result.total_lines, 0);
        assert!(result.file.is_none());
    }
}

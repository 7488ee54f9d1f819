// LogsView - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The service boundary turns these into human-readable result messages;
// nothing here is ever surfaced to a caller as a panic.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogsView operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogsViewError {
    /// A log file could not be accessed (missing, outside the logs root,
    /// or unreadable).
    Access(AccessError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogsViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access(e) => write!(f, "{e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogsViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Access(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Access errors
// ---------------------------------------------------------------------------

/// Errors raised while resolving a requested file to a readable log file.
///
/// Traversal attempts are reported as ordinary access failures; there is no
/// separate security category.
#[derive(Debug)]
pub enum AccessError {
    /// The requested name has no usable file-name component (e.g. "..").
    InvalidName { name: String },

    /// The file does not exist or is not a regular file.
    NotFound { path: PathBuf },

    /// The file resolves to a location outside the logs directory.
    OutsideLogsDir { path: PathBuf },

    /// The file exists but could not be read.
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { name } => write!(f, "Invalid log file name '{name}'"),
            Self::NotFound { path } => write!(
                f,
                "Log file '{}' not found or not accessible",
                path.display()
            ),
            Self::OutsideLogsDir { path } => write!(
                f,
                "Log file '{}' not found or not accessible",
                path.display()
            ),
            Self::Unreadable { path, source } => write!(
                f,
                "Log file '{}' is not readable: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for AccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<AccessError> for LogsViewError {
    fn from(e: AccessError) -> Self {
        Self::Access(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// Never fatal: `load_config` reports these as warnings and falls back to
/// defaults, so they do not convert into `LogsViewError`.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to rendering entries as JSON or CSV.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the output.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Export I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ExportError> for LogsViewError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for LogsView results.
pub type Result<T> = std::result::Result<T, LogsViewError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_outside_logs_dir_reads_like_not_found() {
        let outside = AccessError::OutsideLogsDir {
            path: PathBuf::from("/etc/passwd"),
        };
        let missing = AccessError::NotFound {
            path: PathBuf::from("/etc/passwd"),
        };
        assert_eq!(outside.to_string(), missing.to_string());
    }

    #[test]
    fn test_io_error_preserves_source_chain() {
        let err = LogsViewError::Io {
            path: PathBuf::from("app.log"),
            operation: "delete",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("delete"));
        assert!(err.to_string().contains("app.log"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_access_error_converts_into_top_level() {
        let err: LogsViewError = AccessError::InvalidName {
            name: "..".to_string(),
        }
        .into();
        assert!(matches!(err, LogsViewError::Access(_)));
        assert_eq!(err.to_string(), "Invalid log file name '..'");
    }

    #[test]
    fn test_config_error_stands_alone_with_source() {
        let err = ConfigError::Io {
            path: PathBuf::from("config.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("config.toml"));
        assert!(err.source().is_some());

        let range = ConfigError::ValueOutOfRange {
            field: "logs.default_limit".to_string(),
            value: "0".to_string(),
            expected: "1..=100000".to_string(),
        };
        assert!(range.source().is_none());
    }
}

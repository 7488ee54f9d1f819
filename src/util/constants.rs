// LogsView - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogsView";

/// Application identifier used for config directories.
pub const APP_ID: &str = "LogsView";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Logs directory
// =============================================================================

/// Environment variable that overrides the logs directory.
pub const LOGS_DIR_ENV: &str = "LOGS_DIR";

/// Environment variable naming the application root. The default logs
/// directory lives beneath it.
pub const APP_ROOT_ENV: &str = "APP_ROOT";

/// Logs directory relative to the application root.
pub const DEFAULT_LOGS_SUBDIR: &str = "storage/logs";

/// Glob pattern a file name must match to be listed.
pub const LOG_FILE_PATTERN: &str = "*.log";

/// File name that selects bulk deletion of every listed file.
pub const DELETE_ALL_KEYWORD: &str = "all";

// =============================================================================
// Content retrieval
// =============================================================================

/// Number of entries returned by content retrieval when no limit is given.
pub const DEFAULT_CONTENT_LIMIT: usize = 50;

/// Limit value treated as "no limit". A limit of 0 is also unbounded.
pub const UNBOUNDED_LIMIT: usize = usize::MAX;

/// Largest `[logs] default_limit` accepted from config.toml.
pub const MAX_CONTENT_LIMIT: usize = 100_000;

/// Timestamp layout used for entry timestamps and file modification times.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length of the `YYYY-MM-DD` prefix compared by date filters.
pub const DATE_PREFIX_LEN: usize = 10;

// =============================================================================
// Size formatting
// =============================================================================

/// Binary size units, smallest first. Sizes past the last unit stay in it.
pub const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB"];

/// Base for size unit conversion.
pub const SIZE_UNIT_BASE: u64 = 1024;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Valid values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// LogsView - app/service.rs
//
// LogsService: the request-scoped entry point used by front ends.
//
// Every operation performs blocking I/O against the configured logs
// directory and returns a fully materialised result. Failures of any kind
// (missing file, traversal attempt, read/delete error) come back inside the
// result value; no method returns `Err` or panics on bad input.

use crate::core::discovery;
use crate::core::filter::{self, FilterSpec};
use crate::core::model::{ContentResult, DeletionResult, LogFileInfo};
use crate::core::parser;
use crate::platform::config::{self, AppConfig};
use crate::platform::fs::{self as pfs, FileSystem, RealFs};
use crate::util::constants;
use crate::util::error::{AccessError, LogsViewError};
use std::path::{Path, PathBuf};

/// Log directory browser over a single logs root.
pub struct LogsService {
    logs_dir: PathBuf,
    fs: Box<dyn FileSystem>,
}

impl std::fmt::Debug for LogsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogsService")
            .field("logs_dir", &self.logs_dir)
            .finish_non_exhaustive()
    }
}

impl LogsService {
    /// Service over an explicit logs directory.
    pub fn new(logs_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(logs_dir, Box::new(RealFs))
    }

    /// Service over the directory chosen by `config::resolve_logs_dir`.
    pub fn from_config(explicit: Option<&Path>, app_config: &AppConfig) -> Self {
        Self::new(config::resolve_logs_dir(explicit, app_config))
    }

    /// Service with a custom read/remove backend.
    pub fn with_fs(logs_dir: impl Into<PathBuf>, fs: Box<dyn FileSystem>) -> Self {
        let logs_dir = logs_dir.into();
        tracing::debug!(logs_dir = %logs_dir.display(), "LogsService created");
        Self { logs_dir, fs }
    }

    /// The configured logs root.
    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// All `*.log` files in the logs root, newest first.
    pub fn get_log_files(&self) -> Vec<LogFileInfo> {
        discovery::list_log_files(&self.logs_dir)
    }

    /// Whether `path` is a regular file inside the logs root.
    pub fn is_valid_log_file(&self, path: &Path) -> bool {
        pfs::is_valid_log_file(path, &self.logs_dir)
    }

    /// Parse, filter and tail one log file.
    ///
    /// Keeps the last `limit` matching entries (0 or `UNBOUNDED_LIMIT` keeps
    /// all), newest first. `total_lines` counts every parsed entry in the
    /// file, before filtering.
    pub fn get_log_content(
        &self,
        file_name: &str,
        filters: &FilterSpec,
        limit: usize,
    ) -> ContentResult {
        match self.read_content(file_name, filters, limit) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(file = file_name, error = %e, "Log content unavailable");
                ContentResult::failed(content_error_message(&e))
            }
        }
    }

    fn read_content(
        &self,
        file_name: &str,
        filters: &FilterSpec,
        limit: usize,
    ) -> Result<ContentResult, LogsViewError> {
        let path = pfs::resolve_in_logs_dir(&self.logs_dir, file_name)?;
        pfs::validate_log_file(&path, &self.logs_dir)?;

        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|e| AccessError::Unreadable {
                path: path.clone(),
                source: e,
            })?;

        let entries = parser::parse_log_content(&content);
        let total_lines = entries.len();

        let mut entries = filter::apply_filters(entries, filters);
        if limit > 0 && limit < constants::UNBOUNDED_LIMIT && entries.len() > limit {
            entries.drain(..entries.len() - limit);
        }
        entries.reverse();

        tracing::debug!(
            file = file_name,
            total = total_lines,
            returned = entries.len(),
            "Log content read"
        );

        Ok(ContentResult {
            entries,
            total_lines,
            file: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
            error: None,
        })
    }

    /// Delete one file, or every listed file when `file_name` is `"all"`.
    pub fn delete_log_file(&self, file_name: &str) -> DeletionResult {
        if file_name == constants::DELETE_ALL_KEYWORD {
            return self.delete_all_log_files();
        }

        let path = match pfs::resolve_in_logs_dir(&self.logs_dir, file_name)
            .and_then(|p| pfs::validate_log_file(&p, &self.logs_dir).map(|_| p))
        {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(file = file_name, error = %e, "Refusing to delete");
                return DeletionResult::single(false, "Log file not found or not accessible");
            }
        };

        match self.fs.remove_file(&path) {
            Ok(()) => {
                tracing::info!(file = %path.display(), "Log file deleted");
                DeletionResult::single(true, "Log file deleted")
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                DeletionResult::single(false, "Log file does not exist")
            }
            Err(e) => {
                let err = LogsViewError::Io {
                    path: path.clone(),
                    operation: "delete",
                    source: e,
                };
                tracing::warn!(error = %err, "Log file deletion failed");
                DeletionResult::single(false, format!("Failed to delete log file: {err}"))
            }
        }
    }

    /// Bulk deletion over a listing snapshot. Not transactional: files removed
    /// before a failure stay removed.
    fn delete_all_log_files(&self) -> DeletionResult {
        let files = self.get_log_files();
        let total = files.len();
        let mut deleted = 0usize;
        let mut errors: Vec<String> = Vec::new();

        for info in &files {
            let path = self.logs_dir.join(&info.name);
            let outcome = pfs::validate_log_file(&path, &self.logs_dir)
                .map_err(LogsViewError::from)
                .and_then(|_| {
                    self.fs
                        .remove_file(&path)
                        .map_err(|source| LogsViewError::Io {
                            path: path.clone(),
                            operation: "delete",
                            source,
                        })
                });
            match outcome {
                Ok(()) => deleted += 1,
                Err(e) => {
                    tracing::warn!(file = %info.name, error = %e, "Bulk delete skipped file");
                    errors.push(info.name.clone());
                }
            }
        }

        tracing::info!(deleted, total, failed = errors.len(), "Bulk delete finished");

        DeletionResult::bulk(deleted, total, errors)
    }
}

/// User-facing message for a content retrieval failure.
fn content_error_message(err: &LogsViewError) -> String {
    match err {
        LogsViewError::Access(AccessError::Unreadable { source, .. }) => {
            format!("Error reading log file: {source}")
        }
        LogsViewError::Access(_) => "Log file not found or not accessible".to_string(),
        other => format!("Error reading log file: {other}"),
    }
}

// LogsView - platform/fs.rs
//
// Filesystem access for log files: containment validation, reading, and
// removal. The `FileSystem` trait lets the service be exercised against
// failing reads/deletes without real permission tricks.

use crate::util::error::AccessError;
use std::io;
use std::path::{Path, PathBuf};

/// Read and remove operations the service performs on validated log files.
pub trait FileSystem: Send + Sync {
    /// Read the full content of a file as text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// `FileSystem` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        read_file_lossy(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// Read the full content of a file as a string.
///
/// For files with invalid UTF-8, uses lossy conversion.
pub fn read_file_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Resolve `path` to its canonical form if it is a regular file inside
/// `logs_dir`.
///
/// Both paths are canonicalised so `..` segments and symlinks are followed
/// before the containment check. Any resolution failure denies access.
pub fn validate_log_file(path: &Path, logs_dir: &Path) -> Result<PathBuf, AccessError> {
    // metadata() follows symlinks: a dangling link is "not found".
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        _ => {
            return Err(AccessError::NotFound {
                path: path.to_path_buf(),
            })
        }
    }

    let real_path = path.canonicalize().map_err(|_| AccessError::NotFound {
        path: path.to_path_buf(),
    })?;
    let real_logs_dir = logs_dir
        .canonicalize()
        .map_err(|_| AccessError::NotFound {
            path: path.to_path_buf(),
        })?;

    // Component-wise prefix: `/var/logs2/x.log` is not inside `/var/logs`.
    if !real_path.starts_with(&real_logs_dir) {
        tracing::debug!(
            path = %path.display(),
            resolved = %real_path.display(),
            logs_dir = %real_logs_dir.display(),
            "Rejected log file outside logs directory"
        );
        return Err(AccessError::OutsideLogsDir {
            path: path.to_path_buf(),
        });
    }

    Ok(real_path)
}

/// True only for an existing regular file whose canonical path lies inside
/// the canonical `logs_dir`.
pub fn is_valid_log_file(path: &Path, logs_dir: &Path) -> bool {
    validate_log_file(path, logs_dir).is_ok()
}

/// Map a requested file name to a path directly inside `logs_dir`.
///
/// Only the final component of `name` is kept, so `../../etc/passwd` maps to
/// `logs_dir/passwd`. Names without a usable final component are rejected.
pub fn resolve_in_logs_dir(logs_dir: &Path, name: &str) -> Result<PathBuf, AccessError> {
    // Treat both separators as separators regardless of platform.
    let base = name.rsplit(&['/', '\\'][..]).next().unwrap_or("");
    match Path::new(base).file_name() {
        Some(file_name) if !base.is_empty() => Ok(logs_dir.join(file_name)),
        _ => Err(AccessError::InvalidName {
            name: name.to_string(),
        }),
    }
}

// LogsView - core/discovery.rs
//
// Non-recursive log file listing with size and modification metadata.
//
// Architecture note: this module uses `walkdir` for directory traversal as an
// OS abstraction. It reads only file *metadata*; file *contents* are owned by
// the app layer.
//
// Per-file I/O errors are non-fatal: files that vanish mid-scan or cannot be
// opened are left out of the listing without surfacing an error.

use crate::core::model::LogFileInfo;
use crate::util::constants;
use chrono::{DateTime, Local};
use std::path::Path;
use std::time::SystemTime;

/// List the `*.log` files directly inside `dir`, most recently modified first.
///
/// A missing or unreadable directory yields an empty list.
pub fn list_log_files(dir: &Path) -> Vec<LogFileInfo> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "Logs directory does not exist");
        return Vec::new();
    }

    let pattern = match glob::Pattern::new(constants::LOG_FILE_PATTERN) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(
                pattern = constants::LOG_FILE_PATTERN,
                error = %e,
                "Invalid log file pattern"
            );
            return Vec::new();
        }
    };

    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut files: Vec<LogFileInfo> = Vec::new();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping inaccessible directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "Skipping non-UTF-8 filename");
            continue;
        };
        if !pattern.matches(name) {
            continue;
        }

        // Readability check: a file we cannot open is not listed.
        if let Err(e) = std::fs::File::open(entry.path()) {
            tracing::debug!(file = name, error = %e, "Skipping unreadable log file");
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!(file = name, error = %e, "Skipping file without metadata");
                continue;
            }
        };

        let size = metadata.len();
        let (modified, modified_timestamp) = describe_mtime(metadata.modified().ok());

        files.push(LogFileInfo {
            name: name.to_string(),
            size,
            size_formatted: format_file_size(size),
            modified,
            modified_timestamp,
        });
    }

    // Newest first; unknown mtimes are 0 and therefore last.
    files.sort_by(|a, b| b.modified_timestamp.cmp(&a.modified_timestamp));

    tracing::debug!(dir = %dir.display(), files = files.len(), "Listing complete");

    files
}

/// Formatted local time and epoch seconds for an optional mtime.
fn describe_mtime(mtime: Option<SystemTime>) -> (String, i64) {
    match mtime {
        Some(t) => {
            let local: DateTime<Local> = t.into();
            let secs = local.timestamp();
            if secs == 0 {
                (String::new(), 0)
            } else {
                (local.format(constants::TIMESTAMP_FORMAT).to_string(), secs)
            }
        }
        None => (String::new(), 0),
    }
}

/// Human-readable file size in binary units.
///
/// At most two decimals, trailing zeros dropped: `1536` -> `"1.5 KB"`.
/// Sizes of 1024 GB and above stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    let units = constants::SIZE_UNITS;
    let base = constants::SIZE_UNIT_BASE;

    let mut pow = 0usize;
    let mut divisor = 1u64;
    while pow + 1 < units.len() && bytes >= divisor * base {
        divisor *= base;
        pow += 1;
    }

    // Ties round away from zero (1152 B -> 1.13 KB); `{:.2}` alone would
    // round them to even.
    let value = ((bytes as f64 / divisor as f64) * 100.0).round() / 100.0;
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');

    format!("{trimmed} {}", units[pow])
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn set_mtime(path: &Path, secs: u64) {
        let file = fs::File::options().write(true).open(path).expect("open");
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .expect("set mtime");
    }

    fn make_temp_dir() -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        fs::write(root.join("a.log"), "[2024-01-01 12:00:00] INFO: a\n").expect("write a.log");
        fs::write(root.join("b.log"), "[2024-01-01 12:00:01] INFO: b\n").expect("write b.log");
        fs::write(root.join("readme.txt"), "not a log\n").expect("write readme.txt");
        fs::write(root.join("app.log.1"), "rotated\n").expect("write app.log.1");

        let sub = root.join("archive");
        fs::create_dir(&sub).expect("mkdir archive");
        fs::write(sub.join("old.log"), "nested\n").expect("write old.log");

        set_mtime(&root.join("a.log"), 1_700_000_000);
        set_mtime(&root.join("b.log"), 1_700_000_500);

        dir
    }

    #[test]
    fn test_lists_only_top_level_log_files_newest_first() {
        let dir = make_temp_dir();
        let files = list_log_files(dir.path());
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.log", "a.log"]);
    }

    #[test]
    fn test_file_metadata_collected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.log");
        fs::write(&path, "hello world").unwrap();
        set_mtime(&path, 1_700_000_000);

        let files = list_log_files(dir.path());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].size, 11);
        assert_eq!(files[0].size_formatted, "11 B");
        assert_eq!(files[0].modified_timestamp, 1_700_000_000);
        assert_eq!(files[0].modified.len(), "YYYY-MM-DD HH:MM:SS".len());
    }

    #[test]
    fn test_missing_directory_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_log_files(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_format_file_size_boundaries() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_format_file_size_clamps_to_gb() {
        assert_eq!(format_file_size(2048 * 1_073_741_824), "2048 GB");
    }

    #[test]
    fn test_format_file_size_rounds_to_two_decimals() {
        // 1234 / 1024 = 1.205...
        assert_eq!(format_file_size(1234), "1.21 KB");
    }

    #[test]
    fn test_format_file_size_ties_round_up() {
        // 1152 / 1024 = 1.125 and 2688 / 1024 = 2.625, both exact.
        assert_eq!(format_file_size(1152), "1.13 KB");
        assert_eq!(format_file_size(2688), "2.63 KB");
        assert_eq!(format_file_size(1024 * 1024 + 5 * 1024 * 1024 / 1000), "1 MB");
    }

    #[test]
    fn test_describe_missing_mtime() {
        assert_eq!(describe_mtime(None), (String::new(), 0));
    }
}

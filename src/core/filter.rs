// LogsView - core/filter.rs
//
// Composable filter engine for log entries.
// All active filters are AND-combined.
// Core layer: pure logic, no I/O.

use crate::core::model::LogEntry;
use crate::util::constants::DATE_PREFIX_LEN;
use serde::Deserialize;

/// Complete filter state. All fields are AND-combined when applied.
///
/// Empty strings count as "not set", so a form that submits blank fields
/// behaves the same as one that omits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Level to keep, compared case-insensitively.
    pub level: Option<String>,

    /// Earliest date to keep (`YYYY-MM-DD`, inclusive).
    pub date_from: Option<String>,

    /// Latest date to keep (`YYYY-MM-DD`, inclusive).
    pub date_to: Option<String>,

    /// Case-insensitive substring matched against the message only.
    pub search: Option<String>,
}

impl FilterSpec {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        active(&self.level).is_none()
            && active(&self.date_from).is_none()
            && active(&self.date_to).is_none()
            && active(&self.search).is_none()
    }
}

fn active(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Apply filters to entries, keeping survivors in their original order.
///
/// With no active filter the input vector is returned as is.
pub fn apply_filters(entries: Vec<LogEntry>, filter: &FilterSpec) -> Vec<LogEntry> {
    if filter.is_empty() {
        return entries;
    }

    let level_upper = active(&filter.level).map(str::to_uppercase);
    let search_lower = active(&filter.search).map(str::to_lowercase);
    let date_from = active(&filter.date_from);
    let date_to = active(&filter.date_to);

    entries
        .into_iter()
        .filter(|entry| {
            matches_all(
                entry,
                level_upper.as_deref(),
                date_from,
                date_to,
                search_lower.as_deref(),
            )
        })
        .collect()
}

/// Check if a single entry matches all active filters.
fn matches_all(
    entry: &LogEntry,
    level_upper: Option<&str>,
    date_from: Option<&str>,
    date_to: Option<&str>,
    search_lower: Option<&str>,
) -> bool {
    if let Some(level) = level_upper {
        if entry.level.to_uppercase() != level {
            return false;
        }
    }

    // Timestamps are zero-padded, so plain string ordering is date ordering.
    let entry_date = entry
        .timestamp
        .get(..DATE_PREFIX_LEN)
        .unwrap_or(&entry.timestamp);
    if let Some(from) = date_from {
        if entry_date < from {
            return false;
        }
    }
    if let Some(to) = date_to {
        if entry_date > to {
            return false;
        }
    }

    if let Some(needle) = search_lower {
        if !entry.message.to_lowercase().contains(needle) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(timestamp: &str, level: &str, message: &str) -> LogEntry {
        LogEntry {
            timestamp: timestamp.to_string(),
            level: level.to_string(),
            message: message.to_string(),
            ip: Some("10.0.0.1".to_string()),
            method: None,
            url: Some("/error-page".to_string()),
            context: None,
        }
    }

    fn sample() -> Vec<LogEntry> {
        vec![
            make_entry("2025-01-01 10:00:00", "INFO", "boot"),
            make_entry("2025-01-01 10:00:01", "ERROR", "fail\nstack line 2"),
            make_entry("2025-01-02 09:00:00", "WARN", "Disk almost FULL"),
            make_entry("2025-01-03 23:59:59", "ERROR", "Database timeout"),
        ]
    }

    fn messages(entries: &[LogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let result = apply_filters(sample(), &FilterSpec::default());
        assert_eq!(result, sample());
    }

    #[test]
    fn test_blank_strings_are_inactive() {
        let filter = FilterSpec {
            level: Some(String::new()),
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert_eq!(apply_filters(sample(), &filter).len(), 4);
    }

    #[test]
    fn test_level_filter_any_case() {
        let filter = FilterSpec {
            level: Some("error".to_string()),
            ..Default::default()
        };
        let result = apply_filters(sample(), &filter);
        assert_eq!(messages(&result), vec!["fail\nstack line 2", "Database timeout"]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let filter = FilterSpec {
            date_from: Some("2025-01-01".to_string()),
            date_to: Some("2025-01-02".to_string()),
            ..Default::default()
        };
        let result = apply_filters(sample(), &filter);
        assert_eq!(result.len(), 3);

        let only_last_day = FilterSpec {
            date_from: Some("2025-01-03".to_string()),
            ..Default::default()
        };
        assert_eq!(
            messages(&apply_filters(sample(), &only_last_day)),
            vec!["Database timeout"]
        );
    }

    #[test]
    fn test_text_search_case_insensitive_on_message_only() {
        let filter = FilterSpec {
            search: Some("full".to_string()),
            ..Default::default()
        };
        assert_eq!(
            messages(&apply_filters(sample(), &filter)),
            vec!["Disk almost FULL"]
        );

        // "error" appears in level and url but in no message.
        let filter = FilterSpec {
            search: Some("error".to_string()),
            ..Default::default()
        };
        assert!(apply_filters(sample(), &filter).is_empty());
    }

    #[test]
    fn test_combined_filters() {
        let filter = FilterSpec {
            level: Some("ERROR".to_string()),
            date_from: Some("2025-01-02".to_string()),
            search: Some("database".to_string()),
            ..Default::default()
        };
        let result = apply_filters(sample(), &filter);
        assert_eq!(messages(&result), vec!["Database timeout"]);
    }
}

// LogsView - core/parser.rs
//
// Parsing of the application log format:
//
//   [2025-11-28 20:45:43] LEVEL: message | IP: 1.2.3.4 | GET /path | Context: {...}
//
// A record starts at a line beginning with a bracketed timestamp. Lines that
// do not start that way are continuations (stack traces, multi-line
// messages) of the current record.
//
// Records that do not match the grammar are dropped without error.
// Core layer: operates on text only, never touches the filesystem.

use crate::core::model::{LogContext, LogEntry};
use regex::Regex;
use std::sync::OnceLock;

/// Matches a line that opens a new record.
fn record_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\[[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}\]")
            .expect("record start pattern is valid")
    })
}

/// Matches a complete (possibly multi-line) record.
///
/// Groups: 1 timestamp, 2 level, 3 message, 4 ip, 5 method, 6 url, 7 context.
/// `(?s)` lets the message and trailing segments span continuation lines.
/// The level is ASCII word characters only.
fn entry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?s)^\[([0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2})\]",
            r"\s+((?-u:\w)+):\s+(.+?)",
            r"(?:\s*\|\s*IP:\s*([^|]+))?",
            r"(?:\s*\|\s*([A-Z]+)\s+(.+?))?",
            r"(?:\s*\|\s*Context:\s*(.+))?$",
        ))
        .expect("entry pattern is valid")
    })
}

/// Parse raw log file content into entries, in file order.
pub fn parse_log_content(content: &str) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    let mut dropped = 0usize;
    let mut current = String::new();

    let mut finalize = |raw: &str, entries: &mut Vec<LogEntry>| {
        if raw.is_empty() {
            return;
        }
        match parse_entry(raw.trim()) {
            Some(entry) => entries.push(entry),
            None => dropped += 1,
        }
    };

    for line in content.split('\n') {
        let line = line.trim_end();
        if record_start_re().is_match(line) {
            finalize(&current, &mut entries);
            current.clear();
            current.push_str(line);
        } else {
            current.push('\n');
            current.push_str(line);
        }
    }
    finalize(&current, &mut entries);

    tracing::trace!(entries = entries.len(), dropped, "Parsing complete");

    entries
}

/// Parse a single trimmed record. Returns `None` if it does not match the
/// grammar.
pub fn parse_entry(raw: &str) -> Option<LogEntry> {
    let caps = entry_re().captures(raw)?;

    let trimmed = |idx: usize| caps.get(idx).map(|m| m.as_str().trim().to_string());

    let context = caps
        .get(7)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(LogContext::from_text);

    Some(LogEntry {
        timestamp: caps[1].to_string(),
        level: caps[2].to_uppercase(),
        message: caps[3].trim().to_string(),
        ip: trimmed(4),
        method: trimmed(5),
        url: trimmed(6),
        context,
    })
}

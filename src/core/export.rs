// LogsView - core/export.rs
//
// CSV and JSON rendering of service results.
// Core layer: writes to any Write trait object.

use crate::core::model::{ContentResult, LogEntry};
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;

/// Write entries as CSV.
///
/// Columns: timestamp, level, message, ip, method, url, context.
/// Returns the number of entries written.
pub fn export_csv<W: Write>(entries: &[LogEntry], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["timestamp", "level", "message", "ip", "method", "url", "context"])
        .map_err(|e| ExportError::Csv { source: e })?;

    for entry in entries {
        let context = entry
            .context
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        csv_writer
            .write_record([
                entry.timestamp.as_str(),
                entry.level.as_str(),
                entry.message.as_str(),
                entry.ip.as_deref().unwrap_or(""),
                entry.method.as_deref().unwrap_or(""),
                entry.url.as_deref().unwrap_or(""),
                context.as_str(),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(entries.len())
}

/// Write a content result as pretty-printed JSON.
pub fn export_json<W: Write>(result: &ContentResult, writer: W) -> Result<(), ExportError> {
    write_json(result, writer)
}

/// Write any serialisable result (listing, deletion outcome) as pretty JSON
/// followed by a newline.
pub fn write_json<T: Serialize + ?Sized, W: Write>(
    value: &T,
    mut writer: W,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| ExportError::Json { source: e })?;
    writeln!(writer).map_err(|e| ExportError::Io { source: e })
}

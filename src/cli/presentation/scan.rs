//! Check report rendering.

use super::shared::{Palette, Tag};
use crate::engine::{FileStatus, ScanResult};
use crate::error::IntegrityError;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

/// Per-file lines followed by the summary table.
pub fn format_scan_text(result: &ScanResult, palette: &Palette) -> String {
    let mut lines = vec![palette.line(Tag::Info, "Checking integrity...")];

    for entry in &result.entries {
        let path = palette.bold(&entry.path);
        let line = match (entry.status, &entry.detail) {
            (FileStatus::Ok, _) => palette.line(Tag::Ok, &format!("Unmodified: {}", path)),
            (FileStatus::Modified, _) => palette.line(Tag::Alert, &format!("Modified: {}", path)),
            (FileStatus::Missing, None) => palette.line(Tag::Error, &format!("MISSING: {}", path)),
            (FileStatus::Missing, Some(reason)) => palette.line(
                Tag::Error,
                &format!("MISSING: {} (unreadable: {})", path, reason),
            ),
        };
        lines.push(line);
    }

    let counts = &result.counts;
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["SCAN COMPLETED", ""]);
    table.add_row(vec!["Total Scanned".to_string(), counts.total.to_string()]);
    table.add_row(vec!["✔ OK".to_string(), counts.ok.to_string()]);
    table.add_row(vec!["✖ Modified".to_string(), counts.modified.to_string()]);
    table.add_row(vec!["⚠ Missing".to_string(), counts.missing.to_string()]);

    lines.push(String::new());
    lines.push(table.to_string());
    lines.join("\n")
}

/// The scan result as pretty JSON.
pub fn format_scan_json(result: &ScanResult) -> Result<String, IntegrityError> {
    Ok(serde_json::to_string_pretty(result)?)
}

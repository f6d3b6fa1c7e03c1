//! Init and update summaries.

use super::shared::{Palette, Tag};
use crate::engine::{InitSummary, UnreadableFile, UpdateSummary};

/// Format the result of `init`.
pub fn format_init_summary(summary: &InitSummary, palette: &Palette) -> String {
    let mut lines = vec![palette.line(
        Tag::Info,
        &format!(
            "Initializing baseline for: {}",
            palette.bold(&summary.target.display().to_string())
        ),
    )];
    lines.extend(unreadable_lines(&summary.unreadable, palette));
    lines.push(palette.line(
        Tag::Ok,
        &format!(
            "Baseline initialized for {} file(s).",
            palette.good(&summary.entries.to_string())
        ),
    ));
    lines.join("\n")
}

/// Format the result of `update`.
pub fn format_update_summary(summary: &UpdateSummary, palette: &Palette) -> String {
    let target = palette.bold(&summary.target.display().to_string());
    let mut lines = vec![palette.line(Tag::Info, &format!("Updating baseline for: {}", target))];
    lines.extend(unreadable_lines(&summary.unreadable, palette));
    lines.push(palette.line(
        Tag::Ok,
        &format!(
            "Updated {} file(s) inside {} ({} added, {} changed, {} unchanged; {} total in baseline)",
            palette.good(&summary.updated().to_string()),
            target,
            summary.added,
            summary.changed,
            summary.unchanged,
            summary.total
        ),
    ));
    lines.join("\n")
}

fn unreadable_lines<'a>(
    unreadable: &'a [UnreadableFile],
    palette: &'a Palette,
) -> impl Iterator<Item = String> + 'a {
    unreadable.iter().map(move |u| {
        palette.line(
            Tag::Warn,
            &format!("Skipped unreadable {}: {}", u.path.display(), u.reason),
        )
    })
}

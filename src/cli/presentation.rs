//! CLI presentation: text and JSON rendering of command results.

mod baseline;
mod scan;
mod shared;

pub use baseline::{format_init_summary, format_update_summary};
pub use scan::{format_scan_json, format_scan_text};
pub use shared::{Palette, Tag};

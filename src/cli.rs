//! CLI domain: parse, route, help, output, and presentation only.
//! No integrity logic; the route table dispatches to the engine.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{banner, command_name, usage};
pub use output::{map_error, ExitStatus};
pub use parse::{Cli, Commands, ReportFormat};
pub use presentation::{
    format_init_summary, format_scan_json, format_scan_text, format_update_summary, Palette, Tag,
};
pub use route::{apply_cli_overrides, CommandOutcome, RunContext};

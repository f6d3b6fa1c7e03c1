//! CLI parse: clap types for Veritas. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Veritas - file integrity checker
#[derive(Parser, Debug)]
#[command(name = "veritas", version)]
#[command(about = "Establish a SHA-256 baseline of files and detect drift against it")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Baseline store file (overrides configuration)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Establish a new baseline for a file or directory
    Init {
        /// File or directory to baseline
        path: Option<PathBuf>,
    },
    /// Verify every baselined file
    Check {
        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Refresh the baseline for a file or directory, keeping all other entries
    Update {
        /// File or directory to refresh
        path: Option<PathBuf>,
    },
}

/// Report rendering for `check`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

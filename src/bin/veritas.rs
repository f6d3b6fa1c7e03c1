//! Veritas CLI Binary
//!
//! Command-line interface for the Veritas file integrity checker.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::Path;
use std::process;
use tracing::{error, info};
use veritas::cli::{map_error, usage, Cli, ExitStatus, Palette, RunContext, Tag};
use veritas::config::VeritasConfig;
use veritas::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            // Unknown command: show the usage screen rather than failing
            let palette = Palette::new(!no_color_requested());
            eprintln!("{}", palette.line(Tag::Error, "Invalid command or missing path."));
            println!("{}", usage(&palette));
            return;
        }
        // Help and version requests go to stdout with exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let palette = Palette::new(!no_color_requested());
            let message = e.to_string();
            let first = message.lines().next().unwrap_or("invalid arguments");
            let first = first.strip_prefix("error: ").unwrap_or(first);
            eprintln!("{}", palette.line(Tag::Error, first));
            println!("{}", usage(&palette));
            process::exit(ExitStatus::Usage.code());
        }
    };

    let Some(command) = cli.command.clone() else {
        println!("{}", usage(&Palette::new(!cli.no_color)));
        return;
    };

    let context = match RunContext::new(&cli, Path::new(".")) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e, &Palette::new(!cli.no_color)));
            process::exit(ExitStatus::from(&e).code());
        }
    };

    // Initialize logging once configuration is resolved
    if let Err(e) = init_logging(&build_logging_config(&cli, context.config())) {
        eprintln!("{}", map_error(&e, context.palette()));
        process::exit(ExitStatus::from(&e).code());
    }

    info!("Veritas CLI starting");

    match context.execute(&command) {
        Ok(outcome) => {
            info!(exit_code = outcome.status.code(), "Command completed");
            println!("{}", outcome.output);
            process::exit(outcome.status.code());
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e, context.palette()));
            process::exit(ExitStatus::from(&e).code());
        }
    }
}

/// Logging is off unless --verbose or --log-level asks for it.
fn build_logging_config(cli: &Cli, config: &VeritasConfig) -> LoggingConfig {
    if !cli.verbose && cli.log_level.is_none() {
        return LoggingConfig::disabled();
    }
    config.logging.clone()
}

/// Best-effort flag check for when argument parsing itself failed.
fn no_color_requested() -> bool {
    std::env::args().any(|a| a == "--no-color")
}

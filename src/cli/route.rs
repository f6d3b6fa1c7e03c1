//! CLI route: run context and single dispatch table from commands to the engine.

use crate::cli::help::{command_name, usage};
use crate::cli::output::ExitStatus;
use crate::cli::parse::{Cli, Commands, ReportFormat};
use crate::cli::presentation::{
    format_init_summary, format_scan_json, format_scan_text, format_update_summary, Palette,
};
use crate::config::{ConfigLoader, VeritasConfig};
use crate::engine::IntegrityEngine;
use crate::error::IntegrityError;
use crate::store::JsonBaselineStore;
use std::path::Path;
use tracing::info;

/// Rendered command output plus the exit status it implies.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub output: String,
    pub status: ExitStatus,
}

/// Runtime context for CLI execution: resolved config, engine and palette.
pub struct RunContext {
    config: VeritasConfig,
    engine: IntegrityEngine<JsonBaselineStore>,
    palette: Palette,
}

impl RunContext {
    /// Resolve configuration for `cli` relative to `workspace_root` and build the engine.
    ///
    /// CLI flags take precedence over every configuration source.
    pub fn new(cli: &Cli, workspace_root: &Path) -> Result<Self, IntegrityError> {
        let mut config = match cli.config {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(workspace_root)?,
        };
        apply_cli_overrides(&mut config, cli);
        Self::from_config(config)
    }

    /// Build a context from an already resolved configuration.
    pub fn from_config(config: VeritasConfig) -> Result<Self, IntegrityError> {
        config.validate().map_err(|errors| {
            IntegrityError::Config(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;

        let engine = IntegrityEngine::new(config.open_store(), config.engine_config());
        let palette = Palette::new(config.output.color);
        Ok(Self {
            config,
            engine,
            palette,
        })
    }

    pub fn config(&self) -> &VeritasConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Run one command.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutcome, IntegrityError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Init { path } => match path {
                Some(path) => self.handle_init(path),
                None => Ok(self.usage()),
            },
            Commands::Check { format } => self.handle_check(*format),
            Commands::Update { path } => match path {
                Some(path) => self.handle_update(path),
                None => Ok(self.usage()),
            },
        }
    }

    fn handle_init(&self, path: &Path) -> Result<CommandOutcome, IntegrityError> {
        let summary = self.engine.init(path)?;
        Ok(CommandOutcome {
            output: format_init_summary(&summary, &self.palette),
            status: ExitStatus::Success,
        })
    }

    fn handle_check(&self, format: ReportFormat) -> Result<CommandOutcome, IntegrityError> {
        let result = self.engine.check()?;
        let output = match format {
            ReportFormat::Text => format_scan_text(&result, &self.palette),
            ReportFormat::Json => format_scan_json(&result)?,
        };
        let status = if result.is_clean() {
            ExitStatus::Success
        } else {
            ExitStatus::Drift
        };
        Ok(CommandOutcome { output, status })
    }

    fn handle_update(&self, path: &Path) -> Result<CommandOutcome, IntegrityError> {
        let summary = self.engine.update(path)?;
        Ok(CommandOutcome {
            output: format_update_summary(&summary, &self.palette),
            status: ExitStatus::Success,
        })
    }

    fn usage(&self) -> CommandOutcome {
        CommandOutcome {
            output: usage(&self.palette),
            status: ExitStatus::Success,
        }
    }
}

/// Apply flag overrides on top of the loaded configuration.
pub fn apply_cli_overrides(config: &mut VeritasConfig, cli: &Cli) {
    if let Some(ref store) = cli.store {
        config.store.path = store.clone();
    }
    if cli.no_color {
        config.output.color = false;
        config.logging.color = false;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
}

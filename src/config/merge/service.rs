//! Configuration loading: stacks the sources over the defaults and deserializes
//! the result into `VeritasConfig`.

use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::VeritasConfig;
use config::{ConfigError, File};
use std::path::Path;
use tracing::debug;

use super::merge_policy;

/// Resolves a `VeritasConfig` from files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Standard lookup for a run in `workspace_root`.
    ///
    /// Later layers win: global file, then `veritas.toml` in the workspace,
    /// then `VERITAS_*` variables.
    pub fn load(workspace_root: &Path) -> Result<VeritasConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config = environment::add_to_builder(builder)?.build()?;

        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        config.try_deserialize()
    }

    /// Explicit `--config` file in place of the global and workspace files.
    /// The file must exist; the environment still applies on top.
    pub fn load_from_file(path: &Path) -> Result<VeritasConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let config = environment::add_to_builder(builder)?.build()?;

        debug!(config_path = %path.display(), "Configuration loaded from file");
        config.try_deserialize()
    }
}

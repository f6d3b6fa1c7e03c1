//! Merge rules: defaults, override order, conflict handling.

use crate::store::DEFAULT_STORE_FILE;
use crate::tree::hasher::DEFAULT_CHUNK_SIZE;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("store.path", DEFAULT_STORE_FILE)?
        .set_default("scan.follow_symlinks", false)?
        .set_default("scan.chunk_size", DEFAULT_CHUNK_SIZE as u64)?
        .set_default("output.color", true)
}

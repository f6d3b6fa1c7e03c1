//! Configuration System
//!
//! Layered configuration: built-in defaults, a global file, a workspace file and
//! `VERITAS_*` environment variables, in increasing precedence. The resolved
//! configuration is passed explicitly to the engine and the CLI; nothing reads
//! global state after startup.

use crate::engine::EngineConfig;
use crate::logging::LoggingConfig;
use crate::store::{JsonBaselineStore, DEFAULT_STORE_FILE};
use crate::tree::hasher::DEFAULT_CHUNK_SIZE;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod merge;
mod sources;

pub use merge::service::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VeritasConfig {
    /// Baseline store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Traversal and hashing settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Report presentation settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Baseline store location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Traversal and hashing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Follow symbolic links while walking directories
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Directory or file names pruned from walks
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Bytes read per chunk while hashing
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            chunk_size: default_chunk_size(),
        }
    }
}

/// Report presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colorize status tags and summaries
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
        }
    }
}

impl VeritasConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.store.path.as_os_str().is_empty() {
            errors.push("store.path cannot be empty".to_string());
        }
        if self.scan.chunk_size == 0 {
            errors.push("scan.chunk_size must be greater than zero".to_string());
        }
        if let Err(e) = self.logging.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Engine settings derived from this configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            chunk_size: self.scan.chunk_size,
            walker: WalkerConfig {
                follow_symlinks: self.scan.follow_symlinks,
                ignore_patterns: self.scan.ignore_patterns.clone(),
                exclude: Vec::new(),
            },
        }
    }

    /// Store described by this configuration
    pub fn open_store(&self) -> JsonBaselineStore {
        JsonBaselineStore::new(self.store.path.clone())
    }
}

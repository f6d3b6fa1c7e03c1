//! Baseline Store
//!
//! Durable home of the baseline record. A store is loaded whole and saved whole;
//! there are no partial updates.

pub mod persistence;

pub use persistence::JsonBaselineStore;

use crate::error::IntegrityError;
use crate::types::BaselineRecord;
use std::path::Path;

/// Default store location, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "file_hashes.json";

/// Baseline Store interface
pub trait BaselineStore {
    /// Load the full record. An absent store yields an empty record; an unparseable
    /// one is `IntegrityError::CorruptStore`.
    fn load(&self) -> Result<BaselineRecord, IntegrityError>;

    /// Replace the stored record with `record`.
    fn save(&self, record: &BaselineRecord) -> Result<(), IntegrityError>;

    /// Where the store lives.
    fn location(&self) -> &Path;
}

//! JSON file persistence for the baseline record

use crate::error::IntegrityError;
use crate::store::BaselineStore;
use crate::types::{BaselineRecord, Digest};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store: a pretty-printed JSON object of path to hex digest.
///
/// Keys are written in sorted order with four-space indentation so the file
/// diffs cleanly under version control.
pub struct JsonBaselineStore {
    path: PathBuf,
}

impl JsonBaselineStore {
    /// Create a store backed by the file at `path`. Nothing is touched on disk.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Sibling path used for the write-then-rename in `save`.
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn corrupt(&self, reason: impl Into<String>) -> IntegrityError {
        IntegrityError::CorruptStore {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

/// Serialize a record in the on-disk format.
pub fn encode_record(record: &BaselineRecord) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

impl BaselineStore for JsonBaselineStore {
    fn load(&self) -> Result<BaselineRecord, IntegrityError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(store = %self.path.display(), "No baseline store present");
                return Ok(BaselineRecord::new());
            }
            Err(e) => return Err(IntegrityError::io(&self.path, e)),
        };

        let raw: BTreeMap<String, String> =
            serde_json::from_slice(&content).map_err(|e| self.corrupt(e.to_string()))?;

        let mut record = BaselineRecord::new();
        for (path, value) in raw {
            let digest = Digest::parse(&value)
                .ok_or_else(|| self.corrupt(format!("invalid digest for {}: {:?}", path, value)))?;
            record.insert(path, digest);
        }

        debug!(store = %self.path.display(), entries = record.len(), "Loaded baseline");
        Ok(record)
    }

    fn save(&self, record: &BaselineRecord) -> Result<(), IntegrityError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| IntegrityError::io(parent, e))?;
            }
        }

        let bytes = encode_record(record)
            .map_err(|e| IntegrityError::io(&self.path, std::io::Error::other(e)))?;

        // Atomic write: temp file + fsync + rename
        let tmp_path = self.temp_path();
        let write_tmp = || -> std::io::Result<()> {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()
        };
        if let Err(e) = write_tmp() {
            let _ = fs::remove_file(&tmp_path);
            return Err(IntegrityError::io(&tmp_path, e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(IntegrityError::io(&self.path, e));
        }

        debug!(store = %self.path.display(), entries = record.len(), "Saved baseline");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

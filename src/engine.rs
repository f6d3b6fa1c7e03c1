//! Integrity Engine
//!
//! Builds baselines (`init`), verifies files against them (`check`) and refreshes
//! them additively (`update`). The engine owns no global state: the store and
//! all tunables are handed in at construction.

use crate::error::IntegrityError;
use crate::store::BaselineStore;
use crate::tree::hasher::{self, DEFAULT_CHUNK_SIZE};
use crate::tree::walker::{Walker, WalkerConfig};
use crate::types::{BaselineRecord, Digest, HashOutcome};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Read size for streaming file contents into the hasher
    pub chunk_size: usize,
    /// Directory traversal settings
    pub walker: WalkerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            walker: WalkerConfig::default(),
        }
    }
}

/// A file that was found but could not be hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadableFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of `init`.
#[derive(Debug, Clone)]
pub struct InitSummary {
    pub target: PathBuf,
    /// Number of entries in the new baseline
    pub entries: usize,
    /// Files left out of the baseline because they could not be read
    pub unreadable: Vec<UnreadableFile>,
}

/// Outcome of `update`.
#[derive(Debug, Clone, Default)]
pub struct UpdateSummary {
    pub target: PathBuf,
    /// Paths that were not in the baseline before
    pub added: usize,
    /// Existing paths whose digest changed
    pub changed: usize,
    /// Existing paths re-hashed to the same digest
    pub unchanged: usize,
    /// Total entries in the baseline after the merge
    pub total: usize,
    /// Files that could not be read; their previous entries, if any, are kept
    pub unreadable: Vec<UnreadableFile>,
}

impl UpdateSummary {
    /// Number of files hashed and written under the target.
    pub fn updated(&self) -> usize {
        self.added + self.changed + self.unchanged
    }
}

/// Verification status of one baselined file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Modified,
    Missing,
}

/// One line of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    pub path: String,
    pub status: FileStatus,
    /// Why the file counted as missing when it exists but could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Aggregate counts of a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanCounts {
    pub ok: usize,
    pub modified: usize,
    pub missing: usize,
    pub total: usize,
}

/// Result of one `check`. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub entries: Vec<ScanEntry>,
    pub counts: ScanCounts,
}

impl ScanResult {
    /// True when every baselined file verified ok.
    pub fn is_clean(&self) -> bool {
        self.counts.modified == 0 && self.counts.missing == 0
    }

    /// Status of a single path, if it is in the baseline.
    pub fn status_of(&self, path: &str) -> Option<FileStatus> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.status)
    }
}

/// What a target path resolved to.
enum Target {
    File,
    Directory,
}

/// Hashed files under a target, ready to merge into a record.
struct Collected {
    digests: Vec<(String, Digest)>,
    unreadable: Vec<UnreadableFile>,
}

/// Integrity engine over a baseline store
pub struct IntegrityEngine<S: BaselineStore> {
    store: S,
    config: EngineConfig,
}

impl<S: BaselineStore> IntegrityEngine<S> {
    /// Create an engine. The store file and its temp sibling are always excluded from directory walks.
    pub fn new(store: S, mut config: EngineConfig) -> Self {
        let location = store.location().to_path_buf();
        let mut temp_name = location.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        temp_name.push(".tmp");
        let temp = location.with_file_name(temp_name);
        for path in [location, temp] {
            if !config.walker.exclude.contains(&path) {
                config.walker.exclude.push(path);
            }
        }
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a fresh baseline for `path` and replace the store with it.
    pub fn init(&self, path: &Path) -> Result<InitSummary, IntegrityError> {
        info!(target_path = %path.display(), "Initializing baseline");

        let collected = self.collect(path)?;
        let record: BaselineRecord = collected.digests.into_iter().collect();
        self.store.save(&record)?;

        info!(
            entries = record.len(),
            unreadable = collected.unreadable.len(),
            "Baseline initialized"
        );
        Ok(InitSummary {
            target: path.to_path_buf(),
            entries: record.len(),
            unreadable: collected.unreadable,
        })
    }

    /// Verify every baselined file. Does not write the store.
    pub fn check(&self) -> Result<ScanResult, IntegrityError> {
        let record = self.store.load()?;
        if record.is_empty() {
            return Err(IntegrityError::NoBaseline {
                store: self.store.location().to_path_buf(),
            });
        }

        info!(entries = record.len(), "Checking integrity");

        let mut counts = ScanCounts {
            total: record.len(),
            ..Default::default()
        };
        let mut entries = Vec::with_capacity(record.len());

        for (path, stored) in &record {
            let (status, detail) = self.verify(path, stored);
            match status {
                FileStatus::Ok => counts.ok += 1,
                FileStatus::Modified => counts.modified += 1,
                FileStatus::Missing => counts.missing += 1,
            }
            debug!(path = %path, status = ?status, "Verified");
            entries.push(ScanEntry {
                path: path.clone(),
                status,
                detail,
            });
        }

        info!(
            ok = counts.ok,
            modified = counts.modified,
            missing = counts.missing,
            total = counts.total,
            "Integrity check completed"
        );
        Ok(ScanResult { entries, counts })
    }

    /// Re-hash `path` and merge the results into the existing baseline.
    ///
    /// Entries outside `path`, and entries for files that have since been deleted,
    /// are kept: update only adds or overwrites.
    pub fn update(&self, path: &Path) -> Result<UpdateSummary, IntegrityError> {
        let mut record = self.store.load()?;
        info!(
            target_path = %path.display(),
            existing = record.len(),
            "Updating baseline"
        );

        let collected = self.collect(path)?;

        let mut summary = UpdateSummary {
            target: path.to_path_buf(),
            unreadable: collected.unreadable,
            ..Default::default()
        };
        for (key, digest) in collected.digests {
            match record.insert(key, digest.clone()) {
                None => summary.added += 1,
                Some(previous) if previous != digest => summary.changed += 1,
                Some(_) => summary.unchanged += 1,
            }
        }
        summary.total = record.len();

        self.store.save(&record)?;

        info!(
            added = summary.added,
            changed = summary.changed,
            unchanged = summary.unchanged,
            total = summary.total,
            "Baseline updated"
        );
        Ok(summary)
    }

    fn verify(&self, path: &str, stored: &Digest) -> (FileStatus, Option<String>) {
        let file_path = Path::new(path);
        if !file_path.exists() {
            return (FileStatus::Missing, None);
        }
        match hasher::hash_file(file_path, self.config.chunk_size) {
            HashOutcome::Digest(current) if &current == stored => (FileStatus::Ok, None),
            HashOutcome::Digest(_) => (FileStatus::Modified, None),
            HashOutcome::Unreadable(reason) => {
                warn!(path = %path, reason = %reason, "Baselined file is unreadable");
                (FileStatus::Missing, Some(reason))
            }
        }
    }

    fn classify(&self, path: &Path) -> Result<Target, IntegrityError> {
        let metadata = fs::metadata(path).map_err(|e| IntegrityError::PathError {
            path: path.to_path_buf(),
            reason: if e.kind() == std::io::ErrorKind::NotFound {
                "path does not exist".to_string()
            } else {
                e.to_string()
            },
        })?;

        if metadata.is_file() {
            Ok(Target::File)
        } else if metadata.is_dir() {
            Ok(Target::Directory)
        } else {
            Err(IntegrityError::PathError {
                path: path.to_path_buf(),
                reason: "not a regular file or directory".to_string(),
            })
        }
    }

    /// Resolve `path` to its files and hash each one.
    fn collect(&self, path: &Path) -> Result<Collected, IntegrityError> {
        let walker = Walker::with_config(path.to_path_buf(), self.config.walker.clone());

        let (files, mut unreadable) = match self.classify(path)? {
            Target::File => {
                if walker.is_excluded(path) {
                    return Err(IntegrityError::PathError {
                        path: path.to_path_buf(),
                        reason: "path is the baseline store".to_string(),
                    });
                }
                (vec![path.to_path_buf()], Vec::new())
            }
            Target::Directory => {
                let outcome = walker.walk();
                let skipped = outcome
                    .skipped
                    .into_iter()
                    .map(|(path, reason)| UnreadableFile { path, reason })
                    .collect();
                (outcome.files, skipped)
            }
        };

        let mut digests = Vec::with_capacity(files.len());
        for file in files {
            let Some(key) = file.to_str().map(str::to_string) else {
                warn!(path = %file.display(), "Skipping path that is not valid UTF-8");
                unreadable.push(UnreadableFile {
                    path: file,
                    reason: "path is not valid UTF-8".to_string(),
                });
                continue;
            };

            match hasher::hash_file(&file, self.config.chunk_size) {
                HashOutcome::Digest(digest) => {
                    debug!(path = %key, digest = %digest, "Hashed");
                    digests.push((key, digest));
                }
                HashOutcome::Unreadable(reason) => {
                    warn!(path = %key, reason = %reason, "Skipping unreadable file");
                    unreadable.push(UnreadableFile { path: file, reason });
                }
            }
        }

        Ok(Collected {
            digests,
            unreadable,
        })
    }
}

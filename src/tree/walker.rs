//! Filesystem walker for enumerating the regular files under a baseline target

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false; unfollowed links are skipped)
    pub follow_symlinks: bool,
    /// Path components to prune from the walk (e.g. ".git")
    pub ignore_patterns: Vec<String>,
    /// Files never yielded by the walk, such as the baseline store itself
    pub exclude: Vec<PathBuf>,
}

/// A walk result: regular files in sorted order, plus entries that could not be visited.
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, String)>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
    excluded: Vec<PathBuf>,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, WalkerConfig::default())
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        let excluded = config.exclude.iter().filter_map(|p| absolute_path(p)).collect();
        Self {
            root,
            config,
            excluded,
        }
    }

    /// Walk the tree and collect every regular file beneath the root.
    ///
    /// Paths are `root.join(relative)`, so a relative root yields relative paths.
    /// Entries that cannot be read are recorded in `skipped` and the walk goes on.
    pub fn walk(&self) -> WalkOutcome {
        let mut outcome = WalkOutcome::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.should_ignore(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    warn!(path = %path.display(), error = %e, "Skipping unreadable walk entry");
                    outcome.skipped.push((path, e.to_string()));
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                // Unfollowed symlinks, sockets, fifos and devices are not baselined
                debug!(path = %entry.path().display(), "Skipping non-regular file");
                continue;
            }

            let path = entry.into_path();
            if self.is_excluded(&path) {
                debug!(path = %path.display(), "Skipping excluded file");
                continue;
            }
            outcome.files.push(path);
        }

        // Sort by path for determinism
        outcome.files.sort();
        outcome
    }

    /// Check whether `path` names one of the excluded files.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.excluded.is_empty() {
            return false;
        }
        let Some(name) = path.file_name() else {
            return false;
        };
        if !self.excluded.iter().any(|ex| ex.file_name() == Some(name)) {
            return false;
        }
        match absolute_path(path) {
            Some(abs) => self.excluded.contains(&abs),
            None => false,
        }
    }

    /// Check if an entry should be pruned based on ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern.as_str())
    }
}

/// Resolve a path to an absolute form without requiring the file itself to exist.
///
/// The parent directory is canonicalized and the file name appended, so a store
/// that has not been written yet can still be matched.
fn absolute_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let parent = dunce::canonicalize(parent).ok()?;
    Some(parent.join(name))
}

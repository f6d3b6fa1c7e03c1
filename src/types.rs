//! Core types for the Veritas file integrity checker.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Length of a hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Digest: lowercase hex encoding of a file's SHA-256 content hash
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Wrap raw hash bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Parse a stored hex digest. Returns None unless it is 64 hex characters.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != DIGEST_HEX_LEN {
            return None;
        }
        let bytes = hex::decode(s).ok()?;
        Some(Self::from_bytes(&bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of hashing one file.
///
/// A file that cannot be opened or read yields `Unreadable` with the reason;
/// callers decide whether that means "skip" (init/update) or "missing" (check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOutcome {
    Digest(Digest),
    Unreadable(String),
}

impl HashOutcome {
    pub fn digest(&self) -> Option<&Digest> {
        match self {
            HashOutcome::Digest(d) => Some(d),
            HashOutcome::Unreadable(_) => None,
        }
    }
}

/// Baseline record: path string to digest at baseline time.
///
/// Ordered so that iteration, reports and the serialized store are sorted by path.
pub type BaselineRecord = BTreeMap<String, Digest>;

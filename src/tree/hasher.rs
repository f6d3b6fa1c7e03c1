//! Content hashing for baseline files using SHA-256

use crate::types::{Digest, HashOutcome};
use sha2::{Digest as _, Sha256};
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Default read size when streaming a file through the hasher.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Compute content hash for in-memory bytes
pub fn compute_content_hash(content: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(content);
    Digest::from_bytes(&hasher.finalize())
}

/// Hash a file's contents by streaming it in `chunk_size` reads.
///
/// Memory use is bounded by `chunk_size` regardless of file size. Anything that
/// prevents reading the whole file (missing, permission denied, not a regular
/// file, read error mid-stream) yields `HashOutcome::Unreadable`.
pub fn hash_file(path: &Path, chunk_size: usize) -> HashOutcome {
    match stream_digest(path, chunk_size.max(1)) {
        Ok(digest) => HashOutcome::Digest(digest),
        Err(reason) => HashOutcome::Unreadable(reason),
    }
}

fn stream_digest(path: &Path, chunk_size: usize) -> Result<Digest, String> {
    // Opening a fifo for reading blocks until a writer shows up, so the type
    // check has to happen before the open
    let metadata = fs::metadata(path).map_err(|e| format!("cannot stat: {}", e))?;
    if !metadata.is_file() {
        return Err("not a regular file".to_string());
    }

    let mut file = File::open(path).map_err(|e| format!("cannot open: {}", e))?;
    let metadata = file.metadata().map_err(|e| format!("cannot stat: {}", e))?;
    if !metadata.is_file() {
        return Err("not a regular file".to_string());
    }

    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; chunk_size];
    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(format!("read error: {}", e)),
        };
        hasher.update(&buf[..n]);
    }

    Ok(Digest::from_bytes(&hasher.finalize()))
}

//! Hasher Implementation Verification Tests
//!
//! Verifies that file hashing is plain SHA-256 over the file bytes.

use sha2::{Digest as _, Sha256};
use std::fs;
use tempfile::TempDir;
use veritas::tree::hasher::{self, DEFAULT_CHUNK_SIZE};
use veritas::types::HashOutcome;

use crate::integration::{HELLO_SHA256, WORLD_SHA256};

#[test]
fn test_content_hash_matches_sha256_directly() {
    let content = b"test content";
    let ours = hasher::compute_content_hash(content);
    let direct = hex::encode(Sha256::digest(content));
    assert_eq!(ours.as_str(), direct);
}

#[test]
fn test_known_vectors() {
    assert_eq!(hasher::compute_content_hash(b"hello").as_str(), HELLO_SHA256);
    assert_eq!(hasher::compute_content_hash(b"world").as_str(), WORLD_SHA256);
}

#[test]
fn test_file_hash_independent_of_path() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.bin");
    let b = temp_dir.path().join("nested");
    fs::create_dir(&b).unwrap();
    let b = b.join("b.bin");
    fs::write(&a, b"identical").unwrap();
    fs::write(&b, b"identical").unwrap();

    assert_eq!(
        hasher::hash_file(&a, DEFAULT_CHUNK_SIZE),
        hasher::hash_file(&b, DEFAULT_CHUNK_SIZE)
    );
}

#[test]
fn test_large_file_streams() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("large.bin");
    let content = vec![0xabu8; 3 * 1024 * 1024 + 17];
    fs::write(&path, &content).unwrap();

    let expected = hex::encode(Sha256::digest(&content));
    match hasher::hash_file(&path, DEFAULT_CHUNK_SIZE) {
        HashOutcome::Digest(d) => assert_eq!(d.as_str(), expected),
        HashOutcome::Unreadable(reason) => panic!("unexpected unreadable: {}", reason),
    }
}

//! Property-based tests for digest determinism

use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;
use veritas::tree::hasher::{compute_content_hash, hash_file};
use veritas::types::HashOutcome;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Same bytes always give the same digest
    #[test]
    fn prop_content_hash_deterministic(content in proptest::collection::vec(any::<u8>(), 0..4096)) {
        prop_assert_eq!(compute_content_hash(&content), compute_content_hash(&content));
    }

    /// Flipping one bit changes the digest
    #[test]
    fn prop_single_bit_flip_changes_digest(
        content in proptest::collection::vec(any::<u8>(), 1..2048),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut flipped = content.clone();
        let i = index.index(flipped.len());
        flipped[i] ^= 1 << bit;
        prop_assert_ne!(compute_content_hash(&content), compute_content_hash(&flipped));
    }

    /// Streaming a file with any chunk size matches hashing its bytes in memory
    #[test]
    fn prop_file_hash_matches_content_hash(
        content in proptest::collection::vec(any::<u8>(), 0..20_000),
        chunk_size in 1usize..10_000,
    ) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("f.bin");
        fs::write(&path, &content).unwrap();

        prop_assert_eq!(
            hash_file(&path, chunk_size),
            HashOutcome::Digest(compute_content_hash(&content))
        );
    }
}

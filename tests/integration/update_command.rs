//! Integration tests for additive baseline updates

use std::fs;
use tempfile::TempDir;
use veritas::error::IntegrityError;
use veritas::store::BaselineStore;
use veritas::tree::hasher::compute_content_hash;

use crate::integration::{create_data_dir, engine_in, key};

#[test]
fn test_update_keeps_entries_outside_subtree() {
    let temp_dir = TempDir::new().unwrap();
    let only_a = temp_dir.path().join("only_a");
    let only_b = temp_dir.path().join("only_b");
    fs::create_dir(&only_a).unwrap();
    fs::create_dir(&only_b).unwrap();
    fs::write(only_a.join("A"), "alpha").unwrap();
    fs::write(only_b.join("B"), "beta").unwrap();

    let engine = engine_in(&temp_dir);
    engine.init(&only_a).unwrap();
    engine.update(&only_b).unwrap();
    let before = engine.store().load().unwrap();
    assert_eq!(before.len(), 2);

    let summary = engine.update(&only_a).unwrap();
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.added, 0);

    let after = engine.store().load().unwrap();
    assert_eq!(after, before);
}

#[test]
fn test_update_never_prunes_deleted_files() {
    let temp_dir = TempDir::new().unwrap();
    let data = create_data_dir(temp_dir.path());
    let engine = engine_in(&temp_dir);
    engine.init(&data).unwrap();

    fs::remove_file(data.join("b.txt")).unwrap();
    engine.update(&data).unwrap();

    let record = engine.store().load().unwrap();
    assert!(record.contains_key(&key(&data.join("b.txt"))));

    // The stale entry is still reported by check
    let scan = engine.check().unwrap();
    assert_eq!(scan.counts.missing, 1);
}

#[test]
fn test_update_single_file_upserts() {
    let temp_dir = TempDir::new().unwrap();
    let data = create_data_dir(temp_dir.path());
    let engine = engine_in(&temp_dir);
    engine.init(&data).unwrap();

    let a = data.join("a.txt");
    fs::write(&a, "HELLO").unwrap();
    let summary = engine.update(&a).unwrap();
    assert_eq!(summary.changed, 1);
    assert_eq!(summary.total, 2);

    let record = engine.store().load().unwrap();
    assert_eq!(record[&key(&a)], compute_content_hash(b"HELLO"));
    assert!(engine.check().unwrap().is_clean());
}

#[test]
fn test_update_adds_new_file() {
    let temp_dir = TempDir::new().unwrap();
    let data = create_data_dir(temp_dir.path());
    let engine = engine_in(&temp_dir);
    engine.init(&data.join("a.txt")).unwrap();

    let summary = engine.update(&data.join("b.txt")).unwrap();
    assert_eq!(summary.added, 1);
    assert_eq!(engine.store().load().unwrap().len(), 2);
}

#[test]
fn test_update_nonexistent_path_is_path_error() {
    let temp_dir = TempDir::new().unwrap();
    let data = create_data_dir(temp_dir.path());
    let engine = engine_in(&temp_dir);
    engine.init(&data).unwrap();
    let before = fs::read(engine.store().location()).unwrap();

    let err = engine.update(&data.join("nope")).unwrap_err();
    assert!(matches!(err, IntegrityError::PathError { .. }));
    assert_eq!(fs::read(engine.store().location()).unwrap(), before);
}

#[test]
fn test_update_into_absent_store() {
    let temp_dir = TempDir::new().unwrap();
    let data = create_data_dir(temp_dir.path());
    let engine = engine_in(&temp_dir);

    let summary = engine.update(&data).unwrap();
    assert_eq!(summary.added, 2);
    assert!(engine.check().unwrap().is_clean());
}

//! Integration tests for the JSON baseline store

use std::fs;
use tempfile::TempDir;
use veritas::error::IntegrityError;
use veritas::store::{BaselineStore, JsonBaselineStore};

use crate::integration::{create_data_dir, engine_in};

#[test]
fn test_store_round_trip_after_init() {
    let temp_dir = TempDir::new().unwrap();
    let data = create_data_dir(temp_dir.path());
    let engine = engine_in(&temp_dir);
    engine.init(&data).unwrap();

    let path = engine.store().location().to_path_buf();
    let original = fs::read(&path).unwrap();

    let store = JsonBaselineStore::new(&path);
    let record = store.load().unwrap();
    store.save(&record).unwrap();

    assert_eq!(fs::read(&path).unwrap(), original);
}

#[test]
fn test_store_is_human_readable_json() {
    let temp_dir = TempDir::new().unwrap();
    let data = create_data_dir(temp_dir.path());
    let engine = engine_in(&temp_dir);
    engine.init(&data).unwrap();

    let content = fs::read_to_string(engine.store().location()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 2);
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_corrupt_store_is_not_treated_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let data = create_data_dir(temp_dir.path());
    let engine = engine_in(&temp_dir);
    fs::write(engine.store().location(), "[1, 2, 3]").unwrap();

    assert!(matches!(
        engine.check().unwrap_err(),
        IntegrityError::CorruptStore { .. }
    ));
    assert!(matches!(
        engine.update(&data).unwrap_err(),
        IntegrityError::CorruptStore { .. }
    ));
}

#[test]
fn test_init_overwrites_corrupt_store() {
    let temp_dir = TempDir::new().unwrap();
    let data = create_data_dir(temp_dir.path());
    let engine = engine_in(&temp_dir);
    fs::write(engine.store().location(), "garbage").unwrap();

    engine.init(&data).unwrap();
    assert_eq!(engine.store().load().unwrap().len(), 2);
}

//! Integration tests for layered configuration loading

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use veritas::config::{global_config_path, ConfigLoader, WORKSPACE_CONFIG_FILE};

use crate::integration::with_env;

#[test]
fn test_defaults_without_any_source() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    fs::create_dir_all(&home).unwrap();

    let config = with_env(
        &[
            ("HOME", home.to_str()),
            ("XDG_CONFIG_HOME", None),
            ("VERITAS_STORE__PATH", None),
        ],
        || ConfigLoader::load(temp_dir.path()).unwrap(),
    );
    assert_eq!(config.store.path, PathBuf::from("file_hashes.json"));
    assert_eq!(config.scan.chunk_size, 4096);
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let temp_dir = TempDir::new().unwrap();
    let xdg = temp_dir.path().join("xdg");
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(xdg.join("veritas")).unwrap();
    fs::create_dir_all(&workspace).unwrap();

    fs::write(
        xdg.join("veritas").join("config.toml"),
        "[store]\npath = \"global.json\"\n\n[scan]\nchunk_size = 1024\n",
    )
    .unwrap();
    fs::write(
        workspace.join(WORKSPACE_CONFIG_FILE),
        "[store]\npath = \"workspace.json\"\n",
    )
    .unwrap();

    let config = with_env(
        &[
            ("XDG_CONFIG_HOME", xdg.to_str()),
            ("VERITAS_STORE__PATH", None),
        ],
        || {
            assert_eq!(
                global_config_path(),
                Some(xdg.join("veritas").join("config.toml"))
            );
            ConfigLoader::load(&workspace).unwrap()
        },
    );
    assert_eq!(config.store.path, PathBuf::from("workspace.json"));
    assert_eq!(config.scan.chunk_size, 1024);
}

#[test]
fn test_environment_overrides_files() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    fs::write(
        workspace.join(WORKSPACE_CONFIG_FILE),
        "[store]\npath = \"workspace.json\"\n",
    )
    .unwrap();

    let config = with_env(
        &[
            ("XDG_CONFIG_HOME", temp_dir.path().join("none").to_str()),
            ("VERITAS_STORE__PATH", Some("from-env.json")),
            ("VERITAS_SCAN__IGNORE_PATTERNS", Some(".git,target")),
        ],
        || ConfigLoader::load(&workspace).unwrap(),
    );
    assert_eq!(config.store.path, PathBuf::from("from-env.json"));
    assert_eq!(
        config.scan.ignore_patterns,
        vec![".git".to_string(), "target".to_string()]
    );
}

#[test]
fn test_load_from_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp_dir.path().join("missing.toml")).is_err());
}

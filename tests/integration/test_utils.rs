//! Shared test utilities for integration tests
//!
//! Provides fixture directories, an engine bound to a temp store, and a runner
//! for the CLI binary with an isolated environment.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Mutex;
use tempfile::TempDir;
use veritas::engine::{EngineConfig, IntegrityEngine};
use veritas::store::JsonBaselineStore;

/// SHA-256 of "hello"
pub const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
/// SHA-256 of "world"
pub const WORLD_SHA256: &str = "486ea46224d1bb4fb680f34f7c9ad96a8f24ec88be73ea8e5a6c65260e9cb8a7";

/// Global mutex to serialize process environment mutation across tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Create `<root>/data` holding a.txt ("hello") and b.txt ("world").
pub fn create_data_dir(root: &Path) -> PathBuf {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("a.txt"), "hello").unwrap();
    fs::write(data.join("b.txt"), "world").unwrap();
    data
}

/// Engine whose store lives at `<dir>/file_hashes.json`.
pub fn engine_in(dir: &TempDir) -> IntegrityEngine<JsonBaselineStore> {
    let store = JsonBaselineStore::new(dir.path().join("file_hashes.json"));
    IntegrityEngine::new(store, EngineConfig::default())
}

/// String key the engine uses for `path`.
pub fn key(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

/// Run the CLI binary in `workdir` with config and logging environment isolated.
pub fn run_veritas(workdir: &Path, args: &[&str]) -> Output {
    let home = workdir.join(".home");
    fs::create_dir_all(&home).unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_veritas"));
    cmd.current_dir(workdir)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("VERITAS_LOG")
        .env_remove("VERITAS_LOG_FORMAT")
        .env_remove("VERITAS_LOG_OUTPUT")
        .env_remove("VERITAS_STORE__PATH")
        .env_remove("VERITAS_SCAN__IGNORE_PATTERNS")
        .arg("--no-color")
        .args(args);
    cmd.output().unwrap()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Run `f` with the given environment variables set, restoring them afterwards.
pub fn with_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
        .collect();

    for (k, v) in vars {
        match v {
            Some(v) => std::env::set_var(k, v),
            None => std::env::remove_var(k),
        }
    }

    let result = f();

    for (k, v) in saved {
        match v {
            Some(v) => std::env::set_var(&k, v),
            None => std::env::remove_var(&k),
        }
    }

    result
}

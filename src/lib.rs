//! Veritas: File Integrity Checker
//!
//! Records a SHA-256 baseline of file contents and later detects files that were
//! modified or went missing relative to that baseline.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod store;
pub mod tree;
pub mod types;

//! Filesystem access for baselines
//!
//! Enumerates the regular files under a target and streams their contents
//! through the content hasher.

pub mod hasher;
pub mod walker;

//! fsbaseline: sealed content-integrity baselines
//!
//! Walks a directory tree, records the path, name and SHA-256 digest of every
//! regular file into a CSV snapshot, then seals the snapshot by renaming it to
//! carry the first 8 hex characters of its own digest. Run it on a freshly
//! provisioned system and keep the sealed file as the reference state.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod snapshot;
pub mod tree;
pub mod types;

//! Filesystem traversal and content digests
//!
//! The walker enumerates regular files under a root; the hasher streams each
//! file through SHA-256.

pub mod hasher;
pub mod walker;

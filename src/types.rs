//! Core value types shared by the digest engine, the snapshot pipeline and the CLI.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// Raw SHA-256 output
pub type Hash = [u8; 32];

/// Number of hex characters of the snapshot digest embedded in a sealed file name
pub const SEAL_PREFIX_LEN: usize = 8;

/// SHA-256 digest of a byte stream.
///
/// Renders as 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(Hash);

impl ContentHash {
    pub fn from_bytes(bytes: Hash) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }

    /// Full lowercase hex form
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First [`SEAL_PREFIX_LEN`] hex characters, as embedded in sealed file names
    pub fn short_hex(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(SEAL_PREFIX_LEN);
        hex
    }

    /// Parse a 64-character lowercase hex digest.
    ///
    /// Uppercase input is rejected so that a parsed snapshot re-serializes byte for byte.
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.len() != 64 || s.bytes().any(|b| b.is_ascii_uppercase()) {
            return None;
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).ok()?;
        Some(Self(bytes))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// One row of a baseline: where a file was found, its base name, and its content digest.
///
/// `digest` is `None` when the file could not be read at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub name: String,
    pub digest: Option<ContentHash>,
}

impl FileRecord {
    pub fn new(path: PathBuf, name: String, digest: Option<ContentHash>) -> Self {
        Self { path, name, digest }
    }

    pub fn is_unreadable(&self) -> bool {
        self.digest.is_none()
    }
}

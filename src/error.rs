//! Error types for the baseline pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// A single file could not be digested.
///
/// Recovered by the snapshot builder: the record is kept with an empty digest.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("File not found: {path:?}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DigestError {
    /// Classify an I/O error raised while opening or reading `path`
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            DigestError::NotFound { path, source }
        } else {
            DigestError::Unreadable { path, source }
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            DigestError::NotFound { path, .. } | DigestError::Unreadable { path, .. } => path,
        }
    }
}

/// A directory entry could not be listed during traversal. Never fatal.
#[derive(Debug, Error)]
#[error("Failed to walk {path:?}: {message}")]
pub struct WalkError {
    pub path: Option<PathBuf>,
    pub message: String,
}

impl From<walkdir::Error> for WalkError {
    fn from(err: walkdir::Error) -> Self {
        WalkError {
            path: err.path().map(|p| p.to_path_buf()),
            message: err.to_string(),
        }
    }
}

/// The snapshot file could not be written.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create output directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create snapshot file {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write snapshot rows to {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to flush snapshot file {path:?}: {source}")]
    Sync {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The written snapshot could not be sealed. The unsealed file is left in place.
#[derive(Debug, Error)]
pub enum SealError {
    #[error("Failed to digest snapshot for sealing: {0}")]
    Digest(#[source] DigestError),

    #[error("Snapshot path has no file name: {0:?}")]
    InvalidFileName(PathBuf),

    #[error("Sealed snapshot already exists: {0:?}")]
    TargetExists(PathBuf),

    #[error("Failed to rename {from:?} to {to:?}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A snapshot file could not be parsed back into records.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to open snapshot {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed snapshot {path:?} at line {line}: {message}")]
    Malformed {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("Unexpected snapshot header in {path:?}: {found}")]
    Header { path: PathBuf, found: String },
}

/// Top-level error for a baseline run or verification
#[derive(Debug, Error)]
pub enum BaselineError {
    #[error("Root directory is not accessible: {path:?}: {reason}")]
    InvalidRoot { path: PathBuf, reason: String },

    #[error("Digest failed: {0}")]
    Digest(#[from] DigestError),

    #[error("Write failed: {0}")]
    Write(#[from] WriteError),

    #[error("Seal failed: {0}")]
    Seal(#[from] SealError),

    #[error("Read failed: {0}")]
    Read(#[from] ReadError),

    #[error("Snapshot is not sealed (no _<8 hex> suffix in its name): {0:?}")]
    NotSealed(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),
}

impl From<config::ConfigError> for BaselineError {
    fn from(err: config::ConfigError) -> Self {
        BaselineError::ConfigError(err.to_string())
    }
}

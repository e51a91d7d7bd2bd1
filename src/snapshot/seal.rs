//! Seal step: embed a digest prefix of the written snapshot into its file name

use crate::error::SealError;
use crate::tree::hasher::{self, DEFAULT_CHUNK_SIZE};
use crate::types::{ContentHash, SEAL_PREFIX_LEN};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Result of sealing a snapshot file
#[derive(Debug, Clone, Serialize)]
pub struct Seal {
    /// Final path, with the digest prefix in the file name
    pub path: PathBuf,
    /// Digest of the snapshot bytes at seal time
    pub digest: ContentHash,
}

impl Seal {
    pub fn suffix(&self) -> String {
        self.digest.short_hex()
    }
}

/// Path a snapshot at `path` gets once sealed with `digest`.
///
/// `_<8 hex>` is inserted before the last extension: `baseline.csv` becomes
/// `baseline_2cf24dba.csv`, `a.b.csv` becomes `a.b_2cf24dba.csv`, and a name without
/// an extension gets the suffix appended.
pub fn sealed_path(path: &Path, digest: &ContentHash) -> Result<PathBuf, SealError> {
    let stem = path
        .file_stem()
        .ok_or_else(|| SealError::InvalidFileName(path.to_path_buf()))?;

    let mut name = OsString::from(stem);
    name.push("_");
    name.push(digest.short_hex());
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }

    Ok(path.with_file_name(name))
}

/// Split a sealed file name into its unsealed path and the embedded digest prefix.
///
/// Returns `None` when the name carries no `_<8 lowercase hex>` suffix before its
/// extension.
pub fn parse_sealed_path(path: &Path) -> Option<(PathBuf, String)> {
    let stem = path.file_stem()?.to_str()?;
    let (base, suffix) = stem.rsplit_once('_')?;
    let is_prefix = suffix.len() == SEAL_PREFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if base.is_empty() || !is_prefix {
        return None;
    }

    let mut name = OsString::from(base);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    Some((path.with_file_name(name), suffix.to_string()))
}

/// Seal the snapshot at `path`.
///
/// Must only be called once the snapshot has been fully written and closed. The
/// file is re-read and digested, then renamed to [`sealed_path`]. An existing file
/// at the target is never overwritten. On any failure the unsealed file stays where
/// it is.
pub fn seal(path: &Path) -> Result<Seal, SealError> {
    let digest = hasher::digest_file_with_chunk_size(path, DEFAULT_CHUNK_SIZE).map_err(|e| {
        error!(path = %path.display(), "Failed to digest snapshot: {}", e);
        SealError::Digest(e)
    })?;

    let target = sealed_path(path, &digest)?;
    claim_target(path, &target)?;

    info!(path = %target.display(), digest = %digest, "Snapshot sealed");
    Ok(Seal {
        path: target,
        digest,
    })
}

/// Move `path` to `target` without ever replacing an existing entry.
///
/// A hard link fails atomically when `target` exists; the unsealed name is then
/// unlinked. Filesystems without hard links fall back to a checked rename, where
/// `symlink_metadata` also catches dangling links at the target.
fn claim_target(path: &Path, target: &Path) -> Result<(), SealError> {
    let rename_err = |source: std::io::Error| SealError::Rename {
        from: path.to_path_buf(),
        to: target.to_path_buf(),
        source,
    };
    let exists = || {
        error!(target = %target.display(), "Sealed snapshot already exists");
        SealError::TargetExists(target.to_path_buf())
    };

    match fs::hard_link(path, target) {
        Ok(()) => fs::remove_file(path).map_err(|e| {
            error!("Failed to remove unsealed name: {}", e);
            // Leave only the unsealed file behind
            let _ = fs::remove_file(target);
            rename_err(e)
        }),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(exists()),
        Err(e) => {
            debug!("Hard link unavailable ({}), falling back to rename", e);
            if fs::symlink_metadata(target).is_ok() {
                return Err(exists());
            }
            fs::rename(path, target).map_err(|e| {
                error!("Failed to rename snapshot: {}", e);
                rename_err(e)
            })
        }
    }
}

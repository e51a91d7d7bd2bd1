//! Check a sealed snapshot against its own name and against the files it lists

use crate::error::{BaselineError, DigestError};
use crate::snapshot::seal::parse_sealed_path;
use crate::tree::hasher::{self, DEFAULT_CHUNK_SIZE};
use crate::types::{ContentHash, FileRecord};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Outcome of comparing a sealed name to the file's current content
#[derive(Debug, Clone, Serialize)]
pub struct SealCheck {
    pub path: PathBuf,
    /// Digest prefix embedded in the file name
    pub expected_prefix: String,
    /// Digest of the file as it is now
    pub actual: ContentHash,
}

impl SealCheck {
    pub fn is_intact(&self) -> bool {
        self.actual.short_hex() == self.expected_prefix
    }
}

/// Re-digest a sealed snapshot and compare with the prefix in its name
pub fn verify_seal(path: &Path) -> Result<SealCheck, BaselineError> {
    let (_, expected_prefix) =
        parse_sealed_path(path).ok_or_else(|| BaselineError::NotSealed(path.to_path_buf()))?;
    let actual = hasher::digest_file(path)?;

    let check = SealCheck {
        path: path.to_path_buf(),
        expected_prefix,
        actual,
    };
    if !check.is_intact() {
        warn!(
            path = %path.display(),
            expected = %check.expected_prefix,
            actual = %check.actual.short_hex(),
            "Snapshot content does not match its seal"
        );
    }
    Ok(check)
}

/// Current state of one recorded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecheckStatus {
    Unchanged,
    Modified { expected: ContentHash, actual: ContentHash },
    Missing,
    Unreadable { message: String },
    /// The baseline itself has no digest for this file
    NotBaselined,
    /// The recorded path was not valid UTF-8 at scan time and was stored lossily
    Unrepresentable,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecheckEntry {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: RecheckStatus,
}

/// Per-file comparison of a baseline with the filesystem as it is now
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecheckReport {
    pub entries: Vec<RecheckEntry>,
}

impl RecheckReport {
    pub fn count(&self, pred: impl Fn(&RecheckStatus) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.status)).count()
    }

    pub fn unchanged(&self) -> usize {
        self.count(|s| matches!(s, RecheckStatus::Unchanged))
    }

    /// Entries that differ from the baseline (modified, missing or now unreadable)
    pub fn drifted(&self) -> usize {
        self.count(|s| {
            matches!(
                s,
                RecheckStatus::Modified { .. }
                    | RecheckStatus::Missing
                    | RecheckStatus::Unreadable { .. }
            )
        })
    }

    pub fn is_clean(&self) -> bool {
        self.drifted() == 0
    }
}

/// Re-digest every recorded path.
///
/// Only the listed files are examined; files added since the baseline are not
/// discovered. A recorded path that no longer resolves and carries U+FFFD was
/// written lossily at scan time; it is reported as `Unrepresentable` and does
/// not count as drift.
#[instrument(skip(records), fields(records = records.len()))]
pub fn recheck(records: &[FileRecord], chunk_size: usize) -> RecheckReport {
    let entries = records
        .iter()
        .map(|record| {
            let status = recheck_one(record, chunk_size);
            debug!(path = %record.path.display(), ?status, "Rechecked");
            RecheckEntry {
                path: record.path.clone(),
                status,
            }
        })
        .collect();
    RecheckReport { entries }
}

fn recheck_one(record: &FileRecord, chunk_size: usize) -> RecheckStatus {
    let Some(expected) = record.digest else {
        return RecheckStatus::NotBaselined;
    };
    match hasher::digest_file_with_chunk_size(&record.path, chunk_size) {
        Ok(actual) if actual == expected => RecheckStatus::Unchanged,
        Ok(actual) => RecheckStatus::Modified { expected, actual },
        Err(DigestError::NotFound { .. }) if is_lossy(&record.path) => {
            RecheckStatus::Unrepresentable
        }
        Err(DigestError::NotFound { .. }) => RecheckStatus::Missing,
        Err(e @ DigestError::Unreadable { .. }) => RecheckStatus::Unreadable {
            message: e.to_string(),
        },
    }
}

fn is_lossy(path: &Path) -> bool {
    path.to_string_lossy().contains(char::REPLACEMENT_CHARACTER)
}

/// [`recheck`] with the default chunk size
pub fn recheck_default(records: &[FileRecord]) -> RecheckReport {
    recheck(records, DEFAULT_CHUNK_SIZE)
}

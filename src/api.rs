//! Baseline API
//!
//! The full pipeline as plain functions over explicit inputs: scan a root, write
//! the snapshot, seal it. Nothing here prompts or prints; the CLI layer adapts
//! user input to these calls.

use chrono::{SecondsFormat, Utc};
use crate::config::ScanConfig;
use crate::error::BaselineError;
use crate::snapshot::{self, Seal, SnapshotBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, instrument};

/// Outcome of a successful baseline run
#[derive(Debug, Clone, Serialize)]
pub struct BaselineReport {
    pub root: PathBuf,
    /// RFC 3339 UTC start time of the run
    pub started_at: String,
    /// Final sealed snapshot
    pub seal: Seal,
    pub records: usize,
    /// Files recorded without a digest
    pub unreadable: Vec<PathBuf>,
    /// Entries skipped because they could not be listed
    pub walk_errors: usize,
    /// Files whose path was written lossily (not valid UTF-8)
    pub lossy_paths: Vec<PathBuf>,
    pub duration_ms: u128,
}

impl BaselineReport {
    pub fn sealed_path(&self) -> &Path {
        &self.seal.path
    }
}

/// Scan `root`, write the snapshot to `output`, then seal it.
///
/// The two phases are strictly ordered: the snapshot is fully written and closed
/// before it is re-read for its seal digest. A write failure leaves no usable
/// snapshot; a seal failure leaves the unsealed file at `output`.
#[instrument(skip(scan), fields(root = %root.display(), output = %output.display()))]
pub fn create_baseline(
    root: &Path,
    output: &Path,
    scan: &ScanConfig,
) -> Result<BaselineReport, BaselineError> {
    let start = Instant::now();
    let started_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    check_root(root)?;
    scan.validate().map_err(BaselineError::ConfigError)?;

    let snapshot = SnapshotBuilder::new(root.to_path_buf())
        .with_walker_config(scan.walker_config())
        .with_chunk_size(scan.chunk_size)
        .build();

    snapshot::write_snapshot(&snapshot.records, output).map_err(|e| {
        error!("Snapshot write failed: {}", e);
        BaselineError::from(e)
    })?;

    let seal = snapshot::seal(output).map_err(|e| {
        error!(
            unsealed = %output.display(),
            "Seal failed, unsealed snapshot left in place: {}", e
        );
        BaselineError::from(e)
    })?;

    let report = BaselineReport {
        root: root.to_path_buf(),
        started_at,
        seal,
        records: snapshot.records.len(),
        unreadable: snapshot
            .digest_failures
            .iter()
            .map(|e| e.path().clone())
            .collect(),
        walk_errors: snapshot.walk_errors.len(),
        lossy_paths: snapshot.lossy_paths,
        duration_ms: start.elapsed().as_millis(),
    };

    info!(
        sealed = %report.seal.path.display(),
        records = report.records,
        unreadable = report.unreadable.len(),
        lossy_paths = report.lossy_paths.len(),
        duration_ms = report.duration_ms,
        "Baseline completed"
    );
    Ok(report)
}

/// The root must be an existing, readable directory
fn check_root(root: &Path) -> Result<(), BaselineError> {
    let invalid = |reason: String| BaselineError::InvalidRoot {
        path: root.to_path_buf(),
        reason,
    };
    let metadata = std::fs::metadata(root).map_err(|e| invalid(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(invalid("not a directory".to_string()));
    }
    std::fs::read_dir(root).map_err(|e| invalid(e.to_string()))?;
    Ok(())
}

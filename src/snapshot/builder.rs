//! Snapshot builder: walk a root and digest every file into an ordered record list

use crate::error::{DigestError, WalkError};
use crate::tree::hasher::{self, DEFAULT_CHUNK_SIZE};
use crate::tree::walker::{Walker, WalkerConfig};
use crate::types::{ContentHash, FileRecord};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace, warn};

/// Records of one scan plus the non-fatal problems met along the way
#[derive(Debug, Default)]
pub struct Snapshot {
    /// Records in walk order
    pub records: Vec<FileRecord>,
    /// Files that were found but could not be digested
    pub digest_failures: Vec<DigestError>,
    /// Entries the walker could not list
    pub walk_errors: Vec<WalkError>,
    /// Recorded files whose path is not valid UTF-8 and is written lossily
    pub lossy_paths: Vec<PathBuf>,
}

impl Snapshot {
    pub fn unreadable_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_unreadable()).count()
    }
}

/// Builds a [`Snapshot`] for a root directory
pub struct SnapshotBuilder {
    root: PathBuf,
    walker_config: WalkerConfig,
    chunk_size: usize,
}

impl SnapshotBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: WalkerConfig::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Walk the root and digest each file.
    ///
    /// A file that cannot be digested is still recorded, with no digest. Listing
    /// errors skip the affected entry. Neither aborts the scan.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Snapshot {
        let start = Instant::now();
        info!("Starting snapshot build");

        let walker = Walker::with_config(self.root.clone(), self.walker_config.clone());
        let chunk_size = self.chunk_size;
        let snapshot = self.build_with(&walker, |path| {
            hasher::digest_file_with_chunk_size(path, chunk_size)
        });

        info!(
            records = snapshot.records.len(),
            unreadable = snapshot.digest_failures.len(),
            walk_errors = snapshot.walk_errors.len(),
            lossy_paths = snapshot.lossy_paths.len(),
            duration_ms = start.elapsed().as_millis(),
            "Snapshot build completed"
        );
        snapshot
    }

    fn build_with<F>(&self, walker: &Walker, mut digest: F) -> Snapshot
    where
        F: FnMut(&Path) -> Result<ContentHash, DigestError>,
    {
        let mut snapshot = Snapshot::default();

        for item in walker.walk() {
            let file = match item {
                Ok(file) => file,
                Err(e) => {
                    warn!(path = ?e.path, "Skipping entry: {}", e.message);
                    snapshot.walk_errors.push(e);
                    continue;
                }
            };

            if file.path.to_str().is_none() {
                warn!(
                    path = %file.path.display(),
                    "Path is not valid UTF-8, it will be recorded lossily and cannot be rechecked"
                );
                snapshot.lossy_paths.push(file.path.clone());
            }

            let digest = match digest(&file.path) {
                Ok(hash) => {
                    trace!(path = %file.path.display(), digest = %hash, "Digested file");
                    Some(hash)
                }
                Err(e) => {
                    warn!(path = %file.path.display(), "{}", e);
                    snapshot.digest_failures.push(e);
                    None
                }
            };

            snapshot
                .records
                .push(FileRecord::new(file.path, file.name, digest));
        }

        debug!(records = snapshot.records.len(), "Walk exhausted");
        snapshot
    }
}

/// Scan `root` with default settings
pub fn build_snapshot(root: &Path) -> Snapshot {
    SnapshotBuilder::new(root.to_path_buf()).build()
}

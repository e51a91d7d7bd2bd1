//! Filesystem walker yielding every regular file under a root

use crate::error::WalkError;
use std::path::PathBuf;
use tracing::trace;
use walkdir::WalkDir;

/// A regular file discovered during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Full path as discovered (root joined with the relative path)
    pub path: PathBuf,
    /// Base file name
    pub name: String,
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Lazily walk the tree, top-down.
    ///
    /// Siblings are visited in file-name order so repeated walks of an unchanged tree
    /// yield the same sequence. Entries that cannot be listed surface as `Err` items
    /// and the walk continues past them. Each call starts a fresh traversal.
    pub fn walk(&self) -> Files {
        let inner = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter();
        Files { inner }
    }
}

/// Iterator over the regular files of a walk
pub struct Files {
    inner: walkdir::IntoIter,
}

impl Iterator for Files {
    type Item = Result<WalkedFile, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(WalkError::from(e))),
            };

            // With follow_links the file type is that of the link target
            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                trace!(path = %entry.path().display(), "Skipping non-regular entry");
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            return Some(Ok(WalkedFile {
                path: entry.into_path(),
                name,
            }));
        }
    }
}

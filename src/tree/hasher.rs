//! Streaming SHA-256 digests of file content

use crate::error::DigestError;
use crate::types::ContentHash;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Default read size for streaming digests (64 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Digest a file with the default chunk size
pub fn digest_file(path: &Path) -> Result<ContentHash, DigestError> {
    digest_file_with_chunk_size(path, DEFAULT_CHUNK_SIZE)
}

/// Digest a file by streaming it through SHA-256 in `chunk_size` reads.
///
/// Memory use is bounded by `chunk_size` regardless of file size. The result does not
/// depend on `chunk_size`.
pub fn digest_file_with_chunk_size(
    path: &Path,
    chunk_size: usize,
) -> Result<ContentHash, DigestError> {
    let file = File::open(path).map_err(|e| DigestError::from_io(path.to_path_buf(), e))?;
    digest_reader(file, chunk_size).map_err(|e| DigestError::from_io(path.to_path_buf(), e))
}

/// Digest everything `reader` yields until end-of-stream
pub fn digest_reader<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<ContentHash> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
    }

    Ok(ContentHash::from_bytes(hasher.finalize().into()))
}

/// Compute content hash for in-memory bytes
pub fn compute_content_hash(content: &[u8]) -> ContentHash {
    ContentHash::from_bytes(Sha256::digest(content).into())
}

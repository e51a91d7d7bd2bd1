//! Parse a snapshot file back into records

use crate::error::ReadError;
use crate::snapshot::writer::HEADER;
use crate::types::{ContentHash, FileRecord};
use std::path::{Path, PathBuf};

/// Read every record of the snapshot at `path`.
///
/// The header must match exactly. An empty digest field becomes `None`; anything
/// else must be 64 lowercase hex characters.
pub fn read_snapshot(path: &Path) -> Result<Vec<FileRecord>, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| ReadError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers = reader.headers().map_err(|e| malformed(path, 1, e.to_string()))?;
    if headers.iter().ne(HEADER.iter().copied()) {
        return Err(ReadError::Header {
            path: path.to_path_buf(),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            malformed(path, line, e.to_string())
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let (file_path, name, digest) = match (row.get(0), row.get(1), row.get(2)) {
            (Some(p), Some(n), Some(d)) if row.len() == 3 => (p, n, d),
            _ => {
                let message = format!("expected 3 fields, found {}", row.len());
                return Err(malformed(path, line, message));
            }
        };

        let digest = if digest.is_empty() {
            None
        } else {
            let parsed = ContentHash::from_hex(digest)
                .ok_or_else(|| malformed(path, line, format!("invalid digest {:?}", digest)))?;
            Some(parsed)
        };

        records.push(FileRecord::new(
            PathBuf::from(file_path),
            name.to_string(),
            digest,
        ));
    }

    Ok(records)
}

fn malformed(path: &Path, line: u64, message: String) -> ReadError {
    ReadError::Malformed {
        path: path.to_path_buf(),
        line,
        message,
    }
}

//! Tabular writer: persist records as a CSV snapshot

use crate::error::WriteError;
use crate::types::FileRecord;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, error};

/// Exact header row of every snapshot file
pub const HEADER: [&str; 3] = ["File Path", "Filename", "SHA256 Hash"];

/// Write `records` to `output`, replacing any existing file.
///
/// Missing parent directories are created. Rows use CRLF terminators and minimal
/// quoting on every platform. A record without a digest gets an empty third field.
/// The file is flushed, synced and closed before this returns.
pub fn write_snapshot(records: &[FileRecord], output: &Path) -> Result<(), WriteError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(dir = %parent.display(), "Creating output directory");
            fs::create_dir_all(parent).map_err(|e| {
                error!("Failed to create output directory: {}", e);
                WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                }
            })?;
        }
    }

    let file = File::create(output).map_err(|e| WriteError::Create {
        path: output.to_path_buf(),
        source: e,
    })?;

    let csv_err = |e: csv::Error| WriteError::Csv {
        path: output.to_path_buf(),
        source: e,
    };

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(BufWriter::new(file));

    writer.write_record(HEADER).map_err(csv_err)?;
    for record in records {
        let path = record.path.to_string_lossy();
        let digest = record.digest.map(|d| d.to_hex()).unwrap_or_default();
        writer
            .write_record([&*path, record.name.as_str(), digest.as_str()])
            .map_err(csv_err)?;
    }

    let sync_err = |e: std::io::Error| WriteError::Sync {
        path: output.to_path_buf(),
        source: e,
    };
    writer.flush().map_err(sync_err)?;
    let buffered = writer
        .into_inner()
        .map_err(|e| sync_err(std::io::Error::new(e.error().kind(), e.error().to_string())))?;
    let file = buffered.into_inner().map_err(|e| sync_err(e.into_error()))?;
    file.sync_all().map_err(sync_err)?;

    debug!(rows = records.len(), path = %output.display(), "Snapshot written");
    Ok(())
}

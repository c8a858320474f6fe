use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::record::SegmentRecord;

/// Default location of the assembled genome, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "all_sg.fasta";

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Concatenate records in the order given, without a trailing newline.
///
/// Callers pass records in canonical slot order.
#[must_use]
pub fn build_aggregate(records: &[SegmentRecord]) -> String {
    let mut aggregate: String = records.iter().map(SegmentRecord::to_fasta).collect();
    if aggregate.ends_with('\n') {
        aggregate.pop();
    }
    aggregate
}

/// Write the aggregate, replacing any previous output.
///
/// Returns `true` if an existing file was overwritten.
///
/// # Errors
///
/// Returns `OutputError::Write` if the file cannot be written.
pub fn write_aggregate(path: &Path, aggregate: &str) -> Result<bool, OutputError> {
    let overwritten = path.is_file();
    if overwritten {
        warn!(file = %path.display(), "Overwriting existing file");
    }

    std::fs::write(path, aggregate).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(overwritten)
}

/// Write each record on its own into `dir`, named after its input.
///
/// Returns the written paths in the order given.
///
/// # Errors
///
/// Returns `OutputError::Write` if the directory or a file cannot be written.
pub fn write_segment_files(
    dir: &Path,
    records: &[SegmentRecord],
) -> Result<Vec<PathBuf>, OutputError> {
    std::fs::create_dir_all(dir).map_err(|source| OutputError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    records
        .iter()
        .map(|record| {
            let path = dir.join(record.file_name());
            debug!(file = %path.display(), segment = %record.slot, "Writing segment file");
            std::fs::write(&path, record.to_fasta()).map_err(|source| OutputError::Write {
                path: path.clone(),
                source,
            })?;
            Ok(path)
        })
        .collect()
}

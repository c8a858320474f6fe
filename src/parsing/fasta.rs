//! Reading and writing single-record FASTA inputs.
//!
//! Each input holds one segment: a header line followed by one or more
//! (possibly wrapped) sequence lines. Inputs may be gzip/bgzip compressed.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna`, or anything else (read as plain text)
//! - `*.gz`, `*.bgz` (gzip compressed)

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use thiserror::Error;
use tracing::warn;

use crate::core::record::GenomicRecord;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} is empty")]
    Empty(String),

    #[error("Invalid FASTA format in {path}: {reason}")]
    InvalidFormat { path: String, reason: String },
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read the full text of an input, decompressing if needed.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or is not valid UTF-8,
/// or `ParseError::Empty` if it contains no data.
pub fn read_input(path: &Path) -> Result<String, ParseError> {
    let mut text = String::new();
    if is_gzipped(path) {
        MultiGzDecoder::new(File::open(path)?).read_to_string(&mut text)?;
    } else {
        File::open(path)?.read_to_string(&mut text)?;
    }

    if text.trim().is_empty() {
        return Err(ParseError::Empty(path.display().to_string()));
    }

    Ok(text)
}

/// Overwrite an input with new text, compressing if the path is gzipped.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be written.
pub fn write_input(path: &Path, text: &str) -> Result<(), ParseError> {
    if is_gzipped(path) {
        let mut encoder = GzEncoder::new(File::create(path)?, Compression::default());
        encoder.write_all(text.as_bytes())?;
        encoder.finish()?;
    } else {
        std::fs::write(path, text)?;
    }
    Ok(())
}

/// Split the text of a single-record FASTA into header and sequence lines.
///
/// Everything after the first line is treated as sequence. A header that does
/// not start with `>` and any further `>` lines are reported but kept.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the text has no header line.
pub fn parse_record(path: &Path, text: &str) -> Result<GenomicRecord, ParseError> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| ParseError::InvalidFormat {
            path: path.display().to_string(),
            reason: "missing header line".to_string(),
        })?;

    if !header.starts_with('>') {
        warn!(
            file = %path.display(),
            "Header line does not start with '>'"
        );
    }

    let sequence_lines: Vec<&str> = lines.collect();
    let extra_records = sequence_lines
        .iter()
        .filter(|line| line.starts_with('>'))
        .count();
    if extra_records > 0 {
        warn!(
            file = %path.display(),
            extra_records,
            "Only one record per file is supported, additional headers are treated as sequence"
        );
    }

    Ok(GenomicRecord::new(path, header).with_sequence_lines(sequence_lines))
}

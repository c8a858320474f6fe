//! End-to-end assembly of eight segment files into one genome FASTA.
//!
//! 1. Validate that exactly eight inputs were given and all exist
//! 2. Read each input, correcting lowercase sequence
//! 3. Match each header to a segment slot and require all eight
//! 4. Synthesize standardized headers and unwrap sequences
//! 5. Concatenate in canonical order and write the aggregate
//!
//! Reformatted records are held in memory; nothing is written until every
//! input has been matched.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::core::casing::normalize_case;
use crate::core::record::{GenomicRecord, SegmentRecord};
use crate::matching::engine::{match_segments, MatchError, SegmentMatch};
use crate::output::aggregate::{
    build_aggregate, write_aggregate, write_segment_files, OutputError, DEFAULT_OUTPUT,
};
use crate::output::reformat::reformat_record;
use crate::parsing::fasta::{parse_record, read_input, write_input, ParseError};
use crate::utils::validation::{validate_inputs, InputError};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Configuration for an assembly run
#[derive(Debug, Clone)]
pub struct AssemblyConfig {
    /// Path of the assembled genome
    pub output: PathBuf,
    /// Also write each reformatted record to this directory
    pub segments_dir: Option<PathBuf>,
    /// Rewrite inputs whose sequence was lowercase with the uppercased text
    pub persist_case_fixes: bool,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            segments_dir: None,
            persist_case_fixes: false,
        }
    }
}

/// Result of a successful assembly run
#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub output: PathBuf,
    /// An aggregate from a previous run was replaced
    pub overwritten: bool,
    /// Reformatted records in canonical order
    pub segments: Vec<SegmentRecord>,
    /// Per-segment files written, if requested
    pub segment_files: Vec<PathBuf>,
}

/// Read one input, correcting sequence casing.
///
/// # Errors
///
/// Returns `ParseError` if the input cannot be read, rewritten or split.
pub fn load_input(path: &Path, persist_case_fixes: bool) -> Result<GenomicRecord, ParseError> {
    let text = read_input(path)?;
    let report = normalize_case(&text);

    if report.lowercase {
        warn!(
            file = %path.display(),
            "Contains lowercase ACGT characters and will be converted to uppercase"
        );
    }
    if report.non_acgt_lines > 0 {
        warn!(
            file = %path.display(),
            lines = report.non_acgt_lines,
            "Contains non-ACGT characters"
        );
    }

    if report.changed() && persist_case_fixes {
        write_input(path, &report.text)?;
        info!(file = %path.display(), "Rewrote input with uppercase sequence");
    }

    parse_record(path, &report.text)
}

/// Read all inputs in order
///
/// # Errors
///
/// Returns the first `ParseError` encountered.
pub fn load_inputs<P: AsRef<Path>>(
    paths: &[P],
    persist_case_fixes: bool,
) -> Result<Vec<GenomicRecord>, ParseError> {
    paths
        .iter()
        .map(|p| load_input(p.as_ref(), persist_case_fixes))
        .collect()
}

/// Assign every record to its segment slot.
///
/// Unrecognized inputs, duplicate claims and missing segments are logged.
///
/// # Errors
///
/// Returns `MatchError::DuplicateSegment` if two inputs name one slot, or
/// `MatchError::MissingSegments` if any slot is unfilled.
pub fn identify_segments(records: &[GenomicRecord]) -> Result<Vec<SegmentMatch>, MatchError> {
    let matches = match_segments(
        records
            .iter()
            .map(|r| (r.source.as_path(), r.header.as_str())),
    );

    for m in matches.matches() {
        debug!(
            file = %m.source.display(),
            segment = %m.slot,
            alias = %m.alias,
            kind = ?m.kind,
            "Matched segment"
        );
    }
    for path in matches.unrecognized() {
        warn!(file = %path.display(), "Header does not name any segment");
    }
    for dup in matches.duplicates() {
        warn!(
            file = %dup.source.display(),
            existing = %dup.existing.display(),
            segment = %dup.slot,
            "Segment already provided by another input"
        );
    }
    for slot in matches.missing() {
        error!(
            segment = %slot,
            aliases = ?slot.aliases(),
            "No input provides this segment"
        );
    }

    matches.into_complete()
}

/// Run the full assembly over eight segment files.
///
/// # Errors
///
/// Returns `PipelineError` for invalid inputs, unreadable files, missing or
/// duplicate segments, or output that cannot be written. No output is written
/// unless all eight segments were matched.
pub fn run<P: AsRef<Path>>(
    paths: &[P],
    config: &AssemblyConfig,
) -> Result<AssemblyReport, PipelineError> {
    validate_inputs(paths)?;

    let records = load_inputs(paths, config.persist_case_fixes)?;
    let matched = identify_segments(&records)?;

    let segments: Vec<SegmentRecord> = matched
        .iter()
        .map(|m| reformat_record(m, &records[m.input]))
        .collect();

    let segment_files = match &config.segments_dir {
        Some(dir) => write_segment_files(dir, &segments)?,
        None => Vec::new(),
    };

    let aggregate = build_aggregate(&segments);
    let overwritten = write_aggregate(&config.output, &aggregate)?;
    info!(
        file = %config.output.display(),
        segments = segments.len(),
        "Wrote assembled genome"
    );

    Ok(AssemblyReport {
        output: config.output.clone(),
        overwritten,
        segments,
        segment_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_input_fixes_case_in_memory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ha.fa");
        std::fs::write(&path, ">x (HA)\nATGC\natgc\nATGC\n").unwrap();

        let record = load_input(&path, false).unwrap();
        assert_eq!(record.joined_sequence(), "ATGCATGCATGC");
        // Input left alone
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            ">x (HA)\nATGC\natgc\nATGC\n"
        );
    }

    #[test]
    fn test_load_input_persists_case_fix() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ha.fa");
        std::fs::write(&path, ">x (ha)\natgc\n").unwrap();

        load_input(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ">x (ha)\nATGC\n");
    }

    #[test]
    fn test_run_rejects_wrong_count() {
        let config = AssemblyConfig::default();
        let result = run(&[PathBuf::from("a.fa")], &config);
        assert!(matches!(
            result,
            Err(PipelineError::Input(InputError::WrongCount(1)))
        ));
    }
}

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::segment::SegmentSlot;

/// Suffix appended to an input's base name to name its reformatted record
pub const SEGMENT_FILE_SUFFIX: &str = "_sg.fasta";

/// A single-record FASTA input as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicRecord {
    /// Path the record was read from
    pub source: PathBuf,

    /// Header line, including the leading `>`
    pub header: String,

    /// Sequence lines with line terminators removed, as wrapped in the input
    pub sequence_lines: Vec<String>,
}

impl GenomicRecord {
    pub fn new(source: impl Into<PathBuf>, header: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            header: header.into(),
            sequence_lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sequence_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sequence_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Sequence with all wrapping removed. An empty body yields an empty string.
    #[must_use]
    pub fn joined_sequence(&self) -> String {
        self.sequence_lines.concat()
    }
}

/// A record rewritten with a synthesized header and a single-line sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentRecord {
    pub slot: SegmentSlot,

    /// Alias the input was identified by
    pub alias: String,

    /// Input the record came from
    pub source: PathBuf,

    /// Synthesized header line, including the leading `>`
    pub header: String,

    /// Unwrapped sequence
    pub sequence: String,
}

impl SegmentRecord {
    /// Two-line FASTA text, each line newline-terminated
    #[must_use]
    pub fn to_fasta(&self) -> String {
        format!("{}\n{}\n", self.header, self.sequence)
    }

    /// File name for this record when written on its own, derived from the
    /// input's base name (e.g. `ha.fasta` -> `ha.fasta_sg.fasta`)
    #[must_use]
    pub fn file_name(&self) -> String {
        segment_file_name(&self.source)
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.sequence.len()
    }

    /// MD5 of the uppercase sequence (standard convention for sequence checksums)
    #[must_use]
    pub fn md5(&self) -> String {
        format!("{:x}", md5::compute(self.sequence.to_ascii_uppercase()))
    }
}

/// Name of the per-segment file derived from an input path
#[must_use]
pub fn segment_file_name(source: &Path) -> String {
    let base = source
        .file_name()
        .map_or_else(|| source.to_string_lossy(), |n| n.to_string_lossy());
    format!("{base}{SEGMENT_FILE_SUFFIX}")
}

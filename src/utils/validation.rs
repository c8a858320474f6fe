//! Centralized validation and helper functions.

use std::path::{Path, PathBuf};

use crate::core::segment::SEGMENT_COUNT;

/// Input validation error types
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Need exactly {SEGMENT_COUNT} FASTA files, one for each segment (got {0})")]
    WrongCount(usize),
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),
}

/// Check that exactly one input per segment was given and that each exists.
///
/// # Errors
///
/// Returns `InputError::WrongCount` if the number of inputs is not eight, or
/// `InputError::NotFound` for the first input that is not a file.
pub fn validate_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<(), InputError> {
    if paths.len() != SEGMENT_COUNT {
        return Err(InputError::WrongCount(paths.len()));
    }

    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(InputError::NotFound(path.to_path_buf()));
        }
    }

    Ok(())
}

/// A non-blank sequence line made only of lowercase `acgt` and spaces.
///
/// ```
/// use flu_assemble::utils::validation::is_lowercase_nucleotide_line;
///
/// assert!(is_lowercase_nucleotide_line("acgt acgt"));
/// assert!(!is_lowercase_nucleotide_line("ACGT"));
/// assert!(!is_lowercase_nucleotide_line("acgn"));
/// assert!(!is_lowercase_nucleotide_line("   "));
/// ```
#[must_use]
pub fn is_lowercase_nucleotide_line(line: &str) -> bool {
    line.bytes().any(|b| b != b' ')
        && line
            .bytes()
            .all(|b| matches!(b, b'a' | b'c' | b'g' | b't' | b' '))
}

/// A sequence line made only of uppercase `ACGT` and spaces. Blank lines pass.
///
/// ```
/// use flu_assemble::utils::validation::is_uppercase_nucleotide_line;
///
/// assert!(is_uppercase_nucleotide_line("ACGT"));
/// assert!(is_uppercase_nucleotide_line(""));
/// assert!(!is_uppercase_nucleotide_line("ACGN"));
/// assert!(!is_uppercase_nucleotide_line("acgt"));
/// ```
#[must_use]
pub fn is_uppercase_nucleotide_line(line: &str) -> bool {
    line.bytes()
        .all(|b| matches!(b, b'A' | b'C' | b'G' | b'T' | b' '))
}

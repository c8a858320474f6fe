//! Detection and correction of lowercase nucleotide sequences.
//!
//! Works on the raw text of a single-record FASTA input. The header line is
//! never modified. Whether the corrected text is written back is the caller's
//! decision.

use crate::utils::validation::{is_lowercase_nucleotide_line, is_uppercase_nucleotide_line};

/// Outcome of scanning a FASTA text for sequence casing problems
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// Text with sequence lines uppercased when `lowercase` is set, otherwise
    /// the input unchanged
    pub text: String,

    /// A sequence line consisting only of lowercase ACGT was found
    pub lowercase: bool,

    /// Sequence lines with characters outside `ACGT` seen before any
    /// lowercase line was found
    pub non_acgt_lines: usize,
}

impl CaseReport {
    /// True when the corrected text differs from the input
    #[must_use]
    pub fn changed(&self) -> bool {
        self.lowercase
    }
}

/// Scan every sequence line and uppercase the whole body if any line is
/// lowercase ACGT.
///
/// Line terminators are preserved. Running this on its own output is a no-op.
#[must_use]
pub fn normalize_case(text: &str) -> CaseReport {
    let mut lowercase = false;
    let mut non_acgt_lines = 0;

    for line in text.lines().skip(1) {
        if is_lowercase_nucleotide_line(line) {
            lowercase = true;
        } else if !lowercase && !is_uppercase_nucleotide_line(line) {
            non_acgt_lines += 1;
        }
    }

    let text = if lowercase {
        let mut lines = text.split_inclusive('\n');
        let mut fixed = String::with_capacity(text.len());
        if let Some(header) = lines.next() {
            fixed.push_str(header);
        }
        for line in lines {
            fixed.push_str(&line.to_ascii_uppercase());
        }
        fixed
    } else {
        text.to_string()
    };

    CaseReport {
        text,
        lowercase,
        non_acgt_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_input_untouched() {
        let text = ">seg4 HA\nACGT\nTTGA\n";
        let report = normalize_case(text);
        assert!(!report.changed());
        assert_eq!(report.non_acgt_lines, 0);
        assert_eq!(report.text, text);
    }

    #[test]
    fn test_mixed_case_body_is_uppercased() {
        let report = normalize_case(">x segment 4\nATGC\natgc\nATGC\n");
        assert!(report.lowercase);
        assert_eq!(report.text, ">x segment 4\nATGC\nATGC\nATGC\n");
    }

    #[test]
    fn test_header_is_preserved() {
        let report = normalize_case(">lower header (ha)\nacgt\n");
        assert_eq!(report.text, ">lower header (ha)\nACGT\n");
    }

    #[test]
    fn test_all_lines_uppercased_once_flagged() {
        // Lines that are not pure lowercase ACGT are uppercased too
        let report = normalize_case(">h\nacgt\nacgn\n");
        assert!(report.lowercase);
        assert_eq!(report.text, ">h\nACGT\nACGN\n");
    }

    #[test]
    fn test_non_acgt_lines_counted() {
        let report = normalize_case(">h\nACGN\nRYKM\nACGT\n");
        assert!(!report.lowercase);
        assert_eq!(report.non_acgt_lines, 2);
        assert_eq!(report.text, ">h\nACGN\nRYKM\nACGT\n");
    }

    #[test]
    fn test_non_acgt_not_counted_after_lowercase() {
        let report = normalize_case(">h\nacgt\nNNNN\n");
        assert!(report.lowercase);
        assert_eq!(report.non_acgt_lines, 0);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let report = normalize_case(">h\r\nacgt\r\nacgt");
        assert!(report.lowercase);
        assert_eq!(report.text, ">h\r\nACGT\r\nACGT");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_case(">h\natgc\nATGC\n");
        let twice = normalize_case(&once.text);
        assert!(!twice.changed());
        assert_eq!(once.text, twice.text);
    }

    #[test]
    fn test_header_only() {
        let report = normalize_case(">h\n");
        assert!(!report.changed());
        assert_eq!(report.text, ">h\n");
    }
}

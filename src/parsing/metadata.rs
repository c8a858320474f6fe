//! Extraction of strain, subtype and accession from free-text FASTA headers.
//!
//! Headers come from many sources (NCBI Virus, GISAID, IRD, hand-edited
//! files), so each field is located independently by pattern and the first
//! match wins:
//!
//! | Field | Pattern | Example |
//! |-------|---------|---------|
//! | genome | `[ABC]/name.../YYYY` | `A/Hawaii/70/2019` |
//! | subtype | `H<n>N<n>` as a whole word | `H1N1` |
//! | accession | two letters, six digits, optional version | `MN976431.1` |

use std::sync::LazyLock;

use regex::Regex;

use crate::core::header::HeaderMetadata;

static GENOME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ABC]/\w+ *\w*[/\[\w]*\]*/\S*/[0-9]{4}").expect("genome pattern is valid")
});

static SUBTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bH[0-9]+N[0-9]+\b").expect("subtype pattern is valid"));

static ACCESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z]{2}[0-9]{6}(?:\.[0-9]+)?").expect("accession pattern is valid")
});

fn first_match(re: &Regex, header: &str) -> String {
    re.find(header)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[must_use]
pub fn extract_genome(header: &str) -> String {
    first_match(&GENOME_RE, header)
}

#[must_use]
pub fn extract_subtype(header: &str) -> String {
    first_match(&SUBTYPE_RE, header)
}

#[must_use]
pub fn extract_accession(header: &str) -> String {
    first_match(&ACCESSION_RE, header)
}

/// Extract all three metadata fields from a header line
#[must_use]
pub fn extract_metadata(header: &str) -> HeaderMetadata {
    HeaderMetadata {
        genome: extract_genome(header),
        subtype: extract_subtype(header),
        accession: extract_accession(header),
    }
}

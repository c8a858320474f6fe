use serde::Serialize;

use crate::core::segment::SegmentSlot;

/// Metadata pulled from a free-text FASTA header.
///
/// Each field is empty when the header does not contain it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderMetadata {
    /// Strain designation, e.g. `A/Hawaii/70/2019`
    pub genome: String,

    /// HxNy subtype, e.g. `H1N1`
    pub subtype: String,

    /// Sequence database accession, e.g. `MN976431.1`
    pub accession: String,
}

impl HeaderMetadata {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.genome.is_empty() && !self.subtype.is_empty() && !self.accession.is_empty()
    }

    /// Names of the fields that could not be extracted
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("genome", &self.genome),
            ("subtype", &self.subtype),
            ("accession", &self.accession),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Standardized header for one segment of the assembled genome:
///
/// ```text
/// >{position} | {segment} | {genome} | {subtype} | {accession}
/// >1 | PB2 | A/Hawaii/70/2019 | H1N1 | MN976431.1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentHeader {
    pub position: usize,
    pub segment: String,
    pub metadata: HeaderMetadata,
}

impl SegmentHeader {
    pub fn new(slot: SegmentSlot, segment: impl Into<String>, metadata: HeaderMetadata) -> Self {
        Self {
            position: slot.position(),
            segment: segment.into(),
            metadata,
        }
    }

    /// True when every one of the five fields is populated
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.position > 0 && !self.segment.is_empty() && self.metadata.is_complete()
    }
}

impl std::fmt::Display for SegmentHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            ">{} | {} | {} | {} | {}",
            self.position,
            self.segment,
            self.metadata.genome,
            self.metadata.subtype,
            self.metadata.accession
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_header() {
        let header = SegmentHeader::new(
            SegmentSlot::Pb2,
            "PB2",
            HeaderMetadata {
                genome: "A/Hawaii/70/2019".to_string(),
                subtype: "H1N1".to_string(),
                accession: "MN976431.1".to_string(),
            },
        );
        assert!(header.is_complete());
        assert_eq!(
            header.to_string(),
            ">1 | PB2 | A/Hawaii/70/2019 | H1N1 | MN976431.1"
        );
    }

    #[test]
    fn test_header_with_empty_fields() {
        let header = SegmentHeader::new(SegmentSlot::M, "M1", HeaderMetadata::default());
        assert!(!header.is_complete());
        assert_eq!(header.to_string(), ">7 | M1 |  |  | ");
        assert_eq!(
            header.metadata.missing_fields(),
            vec!["genome", "subtype", "accession"]
        );
    }

    #[test]
    fn test_missing_fields_partial() {
        let metadata = HeaderMetadata {
            genome: "A/Test/1/2020".to_string(),
            subtype: String::new(),
            accession: "AB123456.7".to_string(),
        };
        assert!(!metadata.is_complete());
        assert_eq!(metadata.missing_fields(), vec!["subtype"]);
    }
}

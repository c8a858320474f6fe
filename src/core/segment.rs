use serde::Serialize;

/// One of the eight canonical Influenza A genome segments, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentSlot {
    /// Segment 1, polymerase basic 2
    Pb2,
    /// Segment 2, polymerase basic 1 (also carries PB1-F2)
    Pb1,
    /// Segment 3, polymerase acidic
    Pa,
    /// Segment 4, hemagglutinin
    Ha,
    /// Segment 5, nucleoprotein
    Np,
    /// Segment 6, neuraminidase
    Na,
    /// Segment 7, matrix (M1, M2)
    M,
    /// Segment 8, non-structural (NS1, NEP)
    Ns,
}

/// Number of segments in a complete Influenza A genome
pub const SEGMENT_COUNT: usize = 8;

impl SegmentSlot {
    /// All slots in canonical order 1..8
    pub const ALL: [SegmentSlot; SEGMENT_COUNT] = [
        Self::Pb2,
        Self::Pb1,
        Self::Pa,
        Self::Ha,
        Self::Np,
        Self::Na,
        Self::M,
        Self::Ns,
    ];

    /// Zero-based index into [`SegmentSlot::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based canonical segment position
    #[must_use]
    pub fn position(self) -> usize {
        self.index() + 1
    }

    /// Names by which this segment may be identified in a FASTA header.
    ///
    /// The first alias is the one recorded when a header names the segment by
    /// number ("segment 7") rather than by protein.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Pb2 => &["PB2"],
            Self::Pb1 => &["PB1", "PB1-F2"],
            Self::Pa => &["PA"],
            Self::Ha => &["HA"],
            Self::Np => &["NP"],
            Self::Na => &["NA"],
            Self::M => &["M1", "M2"],
            Self::Ns => &["NS1", "NEP"],
        }
    }

    /// Alias recorded for an explicit "segment N" match
    #[must_use]
    pub fn primary_alias(self) -> &'static str {
        self.aliases()[0]
    }
}

impl std::fmt::Display for SegmentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pb2 => "PB2",
            Self::Pb1 => "PB1",
            Self::Pa => "PA",
            Self::Ha => "HA",
            Self::Np => "NP",
            Self::Na => "NA",
            Self::M => "M",
            Self::Ns => "NS",
        };
        write!(f, "{name}")
    }
}

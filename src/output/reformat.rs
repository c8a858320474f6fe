use tracing::warn;

use crate::core::header::SegmentHeader;
use crate::core::record::{GenomicRecord, SegmentRecord};
use crate::matching::engine::SegmentMatch;
use crate::parsing::metadata::extract_metadata;

/// Build the standardized header for a matched input
#[must_use]
pub fn synthesize_header(matched: &SegmentMatch, record: &GenomicRecord) -> SegmentHeader {
    let header = SegmentHeader::new(
        matched.slot,
        matched.alias.clone(),
        extract_metadata(&record.header),
    );

    if !header.is_complete() {
        warn!(
            file = %record.source.display(),
            missing = ?header.metadata.missing_fields(),
            "FASTA header does not contain all information for the segment header"
        );
    }

    header
}

/// Replace the record's header and unwrap its sequence onto one line
#[must_use]
pub fn reformat_record(matched: &SegmentMatch, record: &GenomicRecord) -> SegmentRecord {
    let header = synthesize_header(matched, record);

    SegmentRecord {
        slot: matched.slot,
        alias: matched.alias.clone(),
        source: record.source.clone(),
        header: header.to_string(),
        sequence: record.joined_sequence(),
    }
}

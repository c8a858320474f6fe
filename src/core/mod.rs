//! Core data types for assembling a segmented genome.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`SegmentSlot`]: One of the eight canonical Influenza A segments and its aliases
//! - [`GenomicRecord`]: A single-record FASTA input as read from disk
//! - [`SegmentRecord`]: A record rewritten with a standardized header and unwrapped sequence
//! - [`HeaderMetadata`], [`SegmentHeader`]: Metadata extracted from a header and the
//!   standardized header built from it
//! - [`CaseReport`]: Result of scanning and correcting sequence casing
//!
//! ## Segment Slots
//!
//! | Position | Segment | Aliases |
//! |----------|---------|---------|
//! | 1 | PB2 | PB2 |
//! | 2 | PB1 | PB1, PB1-F2 |
//! | 3 | PA  | PA |
//! | 4 | HA  | HA |
//! | 5 | NP  | NP |
//! | 6 | NA  | NA |
//! | 7 | M   | M1, M2 |
//! | 8 | NS  | NS1, NEP |
//!
//! [`SegmentSlot`]: segment::SegmentSlot
//! [`GenomicRecord`]: record::GenomicRecord
//! [`SegmentRecord`]: record::SegmentRecord
//! [`HeaderMetadata`]: header::HeaderMetadata
//! [`SegmentHeader`]: header::SegmentHeader
//! [`CaseReport`]: casing::CaseReport

pub mod casing;
pub mod header;
pub mod record;
pub mod segment;

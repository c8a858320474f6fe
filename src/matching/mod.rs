//! Segment identification from FASTA headers.
//!
//! This module provides the matching functionality:
//!
//! - [`rules`]: Pure classification of a header to a segment slot
//! - [`engine`]: [`SegmentMatches`], the state threaded through all inputs, and
//!   the completeness check
//!
//! ## Matching Algorithm
//!
//! Inputs are offered in the order given. For each header, the slots not yet
//! filled are tried in canonical order 1..8:
//!
//! 1. **Explicit**: The header contains "segment N" (any case) for the slot's position
//! 2. **Alias**: The header contains one of the slot's aliases as a whole word not
//!    followed by `-`
//!
//! An explicit phrase for any open slot outranks aliases. The first input to
//! claim a slot keeps it; later claims are recorded as duplicates.
//!
//! ## Example
//!
//! ```rust
//! use flu_assemble::matching::engine::match_segments;
//! use flu_assemble::SegmentSlot;
//! use std::path::Path;
//!
//! let matches = match_segments([
//!     (Path::new("a.fa"), ">CY121680.1 A/Boston/DOA2107/2012 segment 4"),
//!     (Path::new("b.fa"), ">A/Boston/DOA2107/2012 NS1 and NEP genes"),
//! ]);
//!
//! assert_eq!(matches.get(SegmentSlot::Ha).unwrap().source, Path::new("a.fa"));
//! assert_eq!(matches.get(SegmentSlot::Ns).unwrap().alias, "NS1");
//! assert_eq!(matches.missing().len(), 6);
//! ```
//!
//! [`SegmentMatches`]: engine::SegmentMatches

pub mod engine;
pub mod rules;

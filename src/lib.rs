//! # flu-assemble
//!
//! A library for assembling a standardized Influenza A genome FASTA from
//! per-segment files.
//!
//! Influenza A genomes have eight segments, and public databases usually hand
//! them out as eight separate FASTA files with free-text headers in whatever
//! style the submitter chose. `flu-assemble` works out which segment each file
//! holds, normalizes sequence casing and wrapping, rewrites every header into a
//! single pipe-delimited form, and concatenates the segments in canonical order.
//!
//! ## Features
//!
//! - **Segment identification**: "segment N" phrases or protein aliases (PB1-F2, M2, NEP, ...)
//! - **Completeness checks**: Fails if any segment is missing or named twice
//! - **Metadata extraction**: Strain designation, subtype and accession from the header
//! - **Case correction**: Lowercase sequence is uppercased
//! - **Gzip input**: `.gz`/`.bgz` inputs are read transparently
//!
//! ## Example
//!
//! ```rust,no_run
//! use flu_assemble::pipeline::{run, AssemblyConfig};
//!
//! let inputs = [
//!     "pb2.fa", "pb1.fa", "pa.fa", "ha.fa", "np.fa", "na.fa", "m.fa", "ns.fa",
//! ];
//! let report = run(&inputs, &AssemblyConfig::default()).unwrap();
//!
//! for segment in &report.segments {
//!     println!("{}", segment.header);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Segment slots, records, header metadata and case correction
//! - [`matching`]: Header classification and segment matching
//! - [`parsing`]: Reading inputs and extracting header metadata
//! - [`output`]: Record reformatting and aggregate assembly
//! - [`pipeline`]: End-to-end assembly run
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod output;
pub mod parsing;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::header::{HeaderMetadata, SegmentHeader};
pub use crate::core::record::{GenomicRecord, SegmentRecord};
pub use crate::core::segment::SegmentSlot;
pub use crate::matching::engine::{match_segments, MatchError, SegmentMatch, SegmentMatches};
pub use crate::pipeline::{AssemblyConfig, AssemblyReport, PipelineError};

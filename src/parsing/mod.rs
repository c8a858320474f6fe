//! Reading segment inputs and pulling metadata out of their headers.
//!
//! This module provides:
//!
//! - **FASTA inputs**: Read a single-record FASTA (plain or gzip) and split it into
//!   header and sequence lines
//! - **Header metadata**: Extract strain designation, subtype and accession from
//!   free-text headers
//!
//! ## Example
//!
//! ```rust,no_run
//! use flu_assemble::parsing::fasta::{parse_record, read_input};
//! use flu_assemble::parsing::metadata::extract_metadata;
//! use std::path::Path;
//!
//! let path = Path::new("ha.fasta");
//! let record = parse_record(path, &read_input(path).unwrap()).unwrap();
//! let metadata = extract_metadata(&record.header);
//! println!("{} {} {}", metadata.genome, metadata.subtype, metadata.accession);
//! ```

pub mod fasta;
pub mod metadata;

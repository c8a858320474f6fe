//! Rewriting matched inputs and assembling the final genome.
//!
//! - [`reformat`]: Synthesizes the standardized header for each matched input and
//!   unwraps its sequence into a two-line record
//! - [`aggregate`]: Concatenates the eight records in canonical order and writes
//!   the result, with optional per-segment files
//!
//! ## Output Format
//!
//! ```text
//! >1 | PB2 | A/Hawaii/70/2019 | H1N1 | MN976431.1
//! ATGGAGAGAATAAAAGAACTAAGAGATCTAATGTCGCAGTCCCGCACTCGCGAGATACTCACT...
//! >2 | PB1 | A/Hawaii/70/2019 | H1N1 | MN976432.1
//! ...
//! >8 | NS1 | A/Hawaii/70/2019 | H1N1 | MN976438.1
//! ATGGACTCCAACACCATGTCAAGCTTTCAGGTAGACTGTTTCCTTTGGCATATCCGCAAG...
//! ```

pub mod aggregate;
pub mod reformat;

//! Command-line interface for flu-assemble.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **assemble**: Build one eight-segment FASTA from eight single-segment files
//! - **identify**: Report which segment each file provides without writing anything
//!
//! ## Usage
//!
//! ```text
//! # Assemble into all_sg.fasta in the current directory
//! flu-assemble assemble pb2.fa pb1.fa pa.fa ha.fa np.fa na.fa m.fa ns.fa
//!
//! # Choose the output and keep the per-segment records
//! flu-assemble assemble *.fasta -o A_Hawaii_70_2019.fasta --segments-dir segments/
//!
//! # Check the inputs first, JSON for scripting
//! flu-assemble identify *.fasta --format json
//! ```

use clap::{Parser, Subcommand};

pub mod assemble;
pub mod identify;

#[derive(Parser)]
#[command(name = "flu-assemble")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Assemble a standardized Influenza A genome FASTA from per-segment files")]
#[command(
    long_about = "flu-assemble takes eight FASTA files, one per Influenza A segment, and writes a single FASTA with the segments in canonical order (PB2, PB1, PA, HA, NP, NA, M, NS).\n\nEach segment is identified from its header, either by a \"segment N\" phrase or by a protein name such as HA or NS1. Headers are rewritten as:\n\n  >position | segment | genome | subtype | accession"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for the summary
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble eight segment files into one FASTA
    Assemble(assemble::AssembleArgs),

    /// Identify the segment in each file without writing output
    Identify(identify::IdentifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

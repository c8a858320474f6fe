use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::matching::engine::SegmentMatch;
use crate::matching::rules::MatchKind;
use crate::output::reformat::synthesize_header;
use crate::pipeline::{identify_segments, load_inputs};
use crate::utils::validation::validate_inputs;

#[derive(Args)]
pub struct IdentifyArgs {
    /// Eight FASTA files with one Influenza A segment per file (plain or gzipped)
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Identification {
    position: usize,
    segment: String,
    alias: String,
    kind: MatchKind,
    source: String,
    header: String,
}

/// Execute identify subcommand
///
/// # Errors
///
/// Returns an error if the inputs are invalid or a segment is missing or duplicated.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    validate_inputs(&args.inputs)?;
    let records = load_inputs(&args.inputs, false)?;
    let matched = identify_segments(&records)?;

    if verbose {
        eprintln!("All {} segments identified", matched.len());
    }

    let rows: Vec<Identification> = matched
        .iter()
        .map(|m: &SegmentMatch| Identification {
            position: m.slot.position(),
            segment: m.slot.to_string(),
            alias: m.alias.clone(),
            kind: m.kind,
            source: m.source.display().to_string(),
            header: synthesize_header(m, &records[m.input]).to_string(),
        })
        .collect();

    match format {
        OutputFormat::Text => print_text_results(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Tsv => print_tsv_results(&rows),
    }

    Ok(())
}

fn print_text_results(rows: &[Identification]) {
    println!("Segment Identification");
    println!("{}", "=".repeat(60));
    for row in rows {
        println!(
            "\n{}. {} via {} ({:?})",
            row.position, row.segment, row.alias, row.kind
        );
        println!("  File: {}", row.source);
        println!("  Header: {}", row.header);
    }
}

fn print_tsv_results(rows: &[Identification]) {
    println!("position\tsegment\talias\tkind\tsource\theader");
    for row in rows {
        println!(
            "{}\t{}\t{}\t{:?}\t{}\t{}",
            row.position, row.segment, row.alias, row.kind, row.source, row.header
        );
    }
}

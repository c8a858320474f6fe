use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::record::SegmentRecord;
use crate::output::aggregate::DEFAULT_OUTPUT;
use crate::pipeline::{self, AssemblyConfig, AssemblyReport};

#[derive(Args)]
pub struct AssembleArgs {
    /// Eight FASTA files with one Influenza A segment per file (plain or gzipped)
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Path of the assembled FASTA
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write each reformatted segment to this directory
    #[arg(long)]
    pub segments_dir: Option<PathBuf>,

    /// Rewrite inputs with lowercase sequence in uppercase
    #[arg(long)]
    pub fix_inputs: bool,
}

impl AssembleArgs {
    fn config(&self) -> AssemblyConfig {
        AssemblyConfig {
            output: self.output.clone(),
            segments_dir: self.segments_dir.clone(),
            persist_case_fixes: self.fix_inputs,
        }
    }
}

/// Per-segment line of the summary
#[derive(Debug, Serialize)]
struct SegmentSummary<'a> {
    position: usize,
    segment: String,
    alias: &'a str,
    source: String,
    header: &'a str,
    length: usize,
    md5: String,
}

impl<'a> From<&'a SegmentRecord> for SegmentSummary<'a> {
    fn from(record: &'a SegmentRecord) -> Self {
        Self {
            position: record.slot.position(),
            segment: record.slot.to_string(),
            alias: &record.alias,
            source: record.source.display().to_string(),
            header: &record.header,
            length: record.length(),
            md5: record.md5(),
        }
    }
}

/// Execute assemble subcommand
///
/// # Errors
///
/// Returns an error if the inputs are invalid, a segment is missing or
/// duplicated, or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AssembleArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.config();
    let report = pipeline::run(&args.inputs, &config)?;

    match format {
        OutputFormat::Text => print_text_report(&report, verbose),
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &AssemblyReport, verbose: bool) {
    if verbose {
        println!("Segments");
        println!("{}", "=".repeat(60));
        for record in &report.segments {
            let summary = SegmentSummary::from(record);
            println!(
                "\n{}. {} ({})",
                summary.position, summary.segment, summary.alias
            );
            println!("  Source: {}", summary.source);
            println!("  Header: {}", summary.header);
            println!("  Length: {}", summary.length);
            println!("  MD5: {}", summary.md5);
        }
        for path in &report.segment_files {
            println!("\nWrote {}", path.display());
        }
        println!();
    }

    println!("Generated {}. Done", report.output.display());
}

fn print_json_report(report: &AssemblyReport) -> anyhow::Result<()> {
    let segments: Vec<SegmentSummary> = report.segments.iter().map(SegmentSummary::from).collect();
    let output = serde_json::json!({
        "output": report.output.display().to_string(),
        "overwritten": report.overwritten,
        "segments": segments,
        "segment_files": report
            .segment_files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(report: &AssemblyReport) {
    println!("position\tsegment\talias\tsource\tlength\tmd5\theader");
    for record in &report.segments {
        let s = SegmentSummary::from(record);
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            s.position, s.segment, s.alias, s.source, s.length, s.md5, s.header
        );
    }
}

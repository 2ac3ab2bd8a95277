use std::fs::{self, File};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use tracing::{info, span, Level, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Registry};

use turtlealign::aligner::{NeedlemanWunsch, PairwiseAligner, ScoringPolicy};
use turtlealign::io::{resolve_sequence, write_alignment};

mod cli;

/// Build our tracing subscriber with stderr logging. `RUST_LOG` takes precedence over the
/// verbosity given on the command line.
fn build_subscriber(verbose: u8) -> impl Subscriber + for<'span> LookupSpan<'span> {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default().with(stderr_log)
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdout().lock()));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create output directory {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Could not create output file {}", path.display()))?;

    Ok(Box::new(BufWriter::new(file)))
}

fn align_command(args: &cli::CliArgs) -> Result<()> {
    let span = span!(Level::INFO, "align_command");
    let _enter = span.enter();

    let policy = ScoringPolicy::new(args.match_score, args.mismatch, args.gap)?;

    let seq1 = resolve_sequence(&args.seq1)
        .with_context(|| format!("Could not read first sequence from '{}'", args.seq1))?;
    let seq2 = resolve_sequence(&args.seq2)
        .with_context(|| format!("Could not read second sequence from '{}'", args.seq2))?;

    info!("Aligning sequences of length {} and {}...", seq1.len(), seq2.len());
    let aligner = NeedlemanWunsch::new(policy);
    let result = aligner.align(&seq1, &seq2)?;
    info!("Done. Alignment score: {}", result.score);

    let writer = open_output(&args.output)?;
    let names = (seq1.name().unwrap_or("seq1"), seq2.name().unwrap_or("seq2"));
    write_alignment(writer, &result, &policy, names, args.output_type.into())
        .with_context(|| format!("Could not write alignment to {}", args.output.display()))?;

    Ok(())
}

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();
    build_subscriber(args.verbose).init();

    align_command(&args)
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use turtlealign::aligner::scoring::{DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH};
use turtlealign::io::OutputType;

/// The various output formats supported by turtlealign
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    /// Aligned first sequence, bridge line and aligned second sequence
    Text,

    /// Both aligned rows as FASTA records
    Fasta,

    /// Score, aligned rows and alignment statistics as JSON
    Json,
}

impl From<OutputFormat> for OutputType {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => OutputType::Text,
            OutputFormat::Fasta => OutputType::Fasta,
            OutputFormat::Json => OutputType::Json,
        }
    }
}

/// Global alignment of DNA sequences
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// First DNA sequence (FASTA file path or sequence)
    #[clap(help_heading = "Inputs")]
    pub seq1: String,

    /// Second DNA sequence (FASTA file path or sequence)
    #[clap(help_heading = "Inputs")]
    pub seq2: String,

    /// Output filename. Use '-' to write to stdout
    #[arg(short, long = "out", default_value = "alignment_output.txt")]
    #[clap(help_heading = "Outputs")]
    pub output: PathBuf,

    /// Output file type
    #[arg(value_enum, short = 'O', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    pub output_type: OutputFormat,

    /// Positive score for a base pair match
    #[arg(short = 'm', long = "mat", default_value_t = DEFAULT_MATCH, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub match_score: i32,

    /// Negative score for a mismatch
    #[arg(short = 'n', long = "mis", default_value_t = DEFAULT_MISMATCH, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub mismatch: i32,

    /// Negative score for the insertion of a gap, smaller than -1
    #[arg(short = 'g', long = "gap", default_value_t = DEFAULT_GAP, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub gap: i32,

    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

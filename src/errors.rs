use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum AlignError {
    /// Gap penalty must be strictly smaller than -1
    InvalidGapPenalty(i32),

    /// Match score must be positive
    InvalidMatchScore(i32),

    /// Mismatch score must be negative
    InvalidMismatchScore(i32),

    /// A sequence contained a symbol outside of A, C, G and T
    InvalidSymbol { symbol: char, position: usize },

    /// No recurrence branch reproduces the score stored at the given matrix cell. Either the
    /// matrix was corrupted or it was filled with a different scoring policy.
    InternalConsistency { row: usize, col: usize },

    /// The score of a matrix cell does not fit into an `i32`
    ScoreOverflow { row: usize, col: usize },

    /// A FASTA input did not hold exactly one record
    FastaRecordCount(usize),

    /// Error variant when we couldn't read from a file
    FileReadError { source: io::Error },

    /// Error variant when the alignment could not be serialized
    SerializationError { source: serde_json::Error },

    /// Other IO errors
    IOError(io::Error),
}

impl Error for AlignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::FileReadError { ref source } => Some(source),
            Self::SerializationError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for AlignError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl From<serde_json::Error> for AlignError {
    fn from(value: serde_json::Error) -> Self {
        Self::SerializationError {
            source: value
        }
    }
}

impl Display for AlignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::InvalidGapPenalty(gap) =>
                write!(f, "-g {gap}: gap penalty must be a negative integer smaller than -1"),
            Self::InvalidMatchScore(score) =>
                write!(f, "-m {score}: match must be a positive integer"),
            Self::InvalidMismatchScore(score) =>
                write!(f, "-n {score}: mismatch penalty must be a negative integer"),
            Self::InvalidSymbol { symbol, position } =>
                write!(f, "Invalid characters in DNA sequence: {symbol:?} at position {position}"),
            Self::InternalConsistency { row, col } =>
                write!(f, "Traceback found no recurrence branch matching cell ({row}, {col})! Was the matrix filled with a different scoring policy?"),
            Self::ScoreOverflow { row, col } =>
                write!(f, "Alignment score overflow at cell ({row}, {col})! The scoring policy values are too large for sequences of this length."),
            Self::FastaRecordCount(n) =>
                write!(f, "Expected exactly one FASTA record, found {n}!"),
            Self::FileReadError { source: _ } =>
                write!(f, "Could not read from file!"),
            Self::SerializationError { source: _ } =>
                write!(f, "Could not serialize the alignment!"),
            Self::IOError(ref err) =>
                err.fmt(f),
        }
    }
}

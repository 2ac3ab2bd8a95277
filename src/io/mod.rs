pub mod fasta;
pub mod output;

use std::path::Path;

use crate::errors::AlignError;
use crate::sequence::DnaSequence;

pub use fasta::{load_sequence, read_single_sequence};
pub use output::{write_alignment, OutputType};

/// Interpret a command line sequence argument: a path to an existing FASTA file is loaded,
/// anything else is taken as a literal sequence.
pub fn resolve_sequence(arg: &str) -> Result<DnaSequence, AlignError> {
    let path = Path::new(arg);

    if path.is_file() {
        load_sequence(path)
    } else {
        arg.parse()
    }
}

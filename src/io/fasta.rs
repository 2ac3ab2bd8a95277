//! Reading input sequences from and writing aligned rows to FASTA files.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta::{self as fasta, record::{Definition, Sequence}, Record};
use tracing::debug;

use crate::aligner::AlignmentResult;
use crate::errors::AlignError;
use crate::sequence::DnaSequence;

/// Read a FASTA stream that holds exactly one record and turn it into a validated sequence.
pub fn read_single_sequence<R: BufRead>(reader: R) -> Result<DnaSequence, AlignError> {
    let mut reader = fasta::io::Reader::new(reader);

    let mut records = Vec::with_capacity(1);
    for result in reader.records() {
        records.push(result?);
    }

    if records.len() != 1 {
        return Err(AlignError::FastaRecordCount(records.len()));
    }

    let record = &records[0];
    let name = String::from_utf8_lossy(record.name()).into_owned();
    let seq = DnaSequence::new(record.sequence())?;

    Ok(seq.with_name(name))
}

/// Load a single-record FASTA file, decompressing it on the fly if the filename ends with `.gz`.
pub fn load_sequence(path: impl AsRef<Path>) -> Result<DnaSequence, AlignError> {
    let p = path.as_ref();
    let is_gzipped = p
        .file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    debug!(path = %p.display(), is_gzipped, "loading sequence from FASTA");

    let file = File::open(p).map_err(|source| AlignError::FileReadError { source })?;
    let reader_inner: Box<dyn BufRead> = if is_gzipped {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    read_single_sequence(reader_inner)
}

/// Write both gapped rows of an alignment as FASTA records.
pub fn write_alignment_fasta<W: Write>(
    result: &AlignmentResult,
    names: (&str, &str),
    output: W,
) -> Result<(), AlignError> {
    let mut writer = fasta::io::Writer::new(output);

    for (name, row) in [(names.0, &result.top), (names.1, &result.bottom)] {
        let header = Definition::new(name, None);
        let seq = Sequence::from(row.as_bytes().to_vec());

        writer.write_record(&Record::new(header, seq))?;
    }

    Ok(())
}

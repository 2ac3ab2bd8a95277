use std::io::Write;

use serde::Serialize;

use crate::aligner::{AlignmentResult, AlignmentStats, ScoringPolicy};
use crate::errors::AlignError;
use crate::io::fasta::write_alignment_fasta;

/// The output formats supported for a finished alignment
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputType {
    /// Three lines: first sequence, bridge, second sequence
    #[default]
    Text,

    /// Both gapped rows as FASTA records
    Fasta,

    /// JSON object with score, rows, scoring policy and statistics
    Json,
}

#[derive(Serialize)]
struct JsonAlignment<'a> {
    score: i32,
    top: &'a str,
    bridge: &'a str,
    bottom: &'a str,
    policy: &'a ScoringPolicy,
    stats: &'a AlignmentStats,
    identity: f64,
}

/// Write `result` in the requested format. `names` are used as FASTA record names.
pub fn write_alignment<W: Write>(
    mut writer: W,
    result: &AlignmentResult,
    policy: &ScoringPolicy,
    names: (&str, &str),
    output_type: OutputType,
) -> Result<(), AlignError> {
    match output_type {
        OutputType::Text => writeln!(writer, "{result}")?,
        OutputType::Fasta => write_alignment_fasta(result, names, &mut writer)?,
        OutputType::Json => {
            let json = JsonAlignment {
                score: result.score,
                top: &result.top,
                bridge: &result.bridge,
                bottom: &result.bottom,
                policy,
                stats: &result.stats,
                identity: result.stats.identity(),
            };

            serde_json::to_writer_pretty(&mut writer, &json)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_alignment, OutputType};
    use crate::aligner::{NeedlemanWunsch, PairwiseAligner};

    #[test]
    fn test_text_output() {
        let aligner = NeedlemanWunsch::default();
        let result = aligner.align("TGAATTCAGTTA", "TGGATCGA").unwrap();

        let mut out = Vec::new();
        write_alignment(&mut out, &result, aligner.policy(), ("a", "b"), OutputType::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "TGAATTCAGTTA\n|| | || |  |\nTGGA-TC-G--A\n");
    }

    #[test]
    fn test_json_output() {
        let aligner = NeedlemanWunsch::default();
        let result = aligner.align("ATTA", "ATTA").unwrap();

        let mut out = Vec::new();
        write_alignment(&mut out, &result, aligner.policy(), ("a", "b"), OutputType::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["score"], 8);
        assert_eq!(value["bridge"], "||||");
        assert_eq!(value["policy"]["gap"], -2);
        assert_eq!(value["stats"]["matches"], 4);
        assert_eq!(value["identity"], 100.0);
    }
}

use tracing::{debug_span, trace};

use crate::errors::AlignError;

pub mod fill;
pub mod matrix;
pub mod scoring;
pub mod traceback;
pub mod utils;

pub use matrix::ScoreMatrix;
pub use scoring::ScoringPolicy;
pub use traceback::{AlignmentResult, TracebackStep, TRACEBACK_PRIORITY};
pub use utils::{AlignedPair, AlignmentStats};

pub trait PairwiseAligner {
    fn align<S1, S2>(&self, seq1: S1, seq2: S2) -> Result<AlignmentResult, AlignError>
    where
        S1: AsRef<[u8]>,
        S2: AsRef<[u8]>;
}

/// Global aligner with linear gap penalties.
///
/// Runs matrix initialization, score filling and traceback with a single [`ScoringPolicy`],
/// so both stages that depend on the policy always see the same values. Inputs are expected
/// to be uppercase A, C, G, T, e.g., taken from a [`crate::sequence::DnaSequence`].
#[derive(Copy, Clone, Debug, Default)]
pub struct NeedlemanWunsch {
    policy: ScoringPolicy,
}

impl NeedlemanWunsch {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Build and fill the score matrix without tracing back
    pub fn score_matrix(&self, seq1: &[u8], seq2: &[u8]) -> Result<ScoreMatrix, AlignError> {
        let mut matrix = ScoreMatrix::new(seq1.len(), seq2.len(), &self.policy)?;
        fill::fill_scores(&mut matrix, seq1, seq2, &self.policy)?;

        Ok(matrix)
    }

    fn align_u8(&self, seq1: &[u8], seq2: &[u8]) -> Result<AlignmentResult, AlignError> {
        let span = debug_span!("align", seq1_len = seq1.len(), seq2_len = seq2.len());
        let _enter = span.enter();

        let matrix = self.score_matrix(seq1, seq2)?;
        trace!("filled score matrix:\n{matrix}");

        traceback::traceback(&matrix, seq1, seq2, &self.policy)
    }
}

impl PairwiseAligner for NeedlemanWunsch {
    fn align<S1, S2>(&self, seq1: S1, seq2: S2) -> Result<AlignmentResult, AlignError>
    where
        S1: AsRef<[u8]>,
        S2: AsRef<[u8]>,
    {
        self.align_u8(seq1.as_ref(), seq2.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::{NeedlemanWunsch, PairwiseAligner, ScoringPolicy};
    use crate::errors::AlignError;
    use crate::sequence::DnaSequence;

    const PAIRS: [(&str, &str); 6] = [
        ("ATTA", "ATTA"),
        ("TGAATTCAGTTA", "TGGATCGA"),
        ("GATTACA", "GCATGCT"),
        ("ACGT", "AGT"),
        ("", "ACG"),
        ("AC", "CA"),
    ];

    #[test]
    fn test_score_is_symmetric() {
        let aligners = [
            NeedlemanWunsch::default(),
            NeedlemanWunsch::new(ScoringPolicy::new(1, -3, -2).unwrap()),
            NeedlemanWunsch::new(ScoringPolicy::new(5, -4, -7).unwrap()),
        ];

        for aligner in &aligners {
            for (a, b) in PAIRS {
                let forward = aligner.align(a, b).unwrap();
                let backward = aligner.align(b, a).unwrap();
                assert_eq!(forward.score, backward.score, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_self_alignment() {
        let aligner = NeedlemanWunsch::default();

        for seq in ["A", "ATTA", "GATTACA", "TGAATTCAGTTA"] {
            let result = aligner.align(seq, seq).unwrap();
            assert_eq!(result.score, 2 * seq.len() as i32);
            assert_eq!(result.bridge, "|".repeat(seq.len()));
            assert_eq!(result.top, seq);
            assert_eq!(result.bottom, seq);
        }
    }

    #[test]
    fn test_empty_against_sequence() {
        let aligner = NeedlemanWunsch::default();
        let result = aligner.align("", "ACGTA").unwrap();
        assert_eq!(result.score, 5 * aligner.policy().gap());
        assert_eq!(result.top, "-----");
        assert_eq!(result.stats.gaps, 5);
    }

    #[test]
    fn test_score_matches_matrix() {
        let aligner = NeedlemanWunsch::default();
        let seq1 = DnaSequence::new("tgaattcagtta").unwrap();
        let seq2 = DnaSequence::new("tggatcga").unwrap();

        let matrix = aligner.score_matrix(seq1.as_bytes(), seq2.as_bytes()).unwrap();
        let result = aligner.align(&seq1, &seq2).unwrap();
        assert_eq!(result.score, matrix.score());
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_large_gap_penalty() {
        let aligner = NeedlemanWunsch::new(ScoringPolicy::new(2, -1, -1_000_000_000).unwrap());

        // Three gap columns cost -3e9
        let err = aligner.align("AAA", "").unwrap_err();
        assert!(matches!(err, AlignError::ScoreOverflow { row: 0, col: 3 }));

        let err = aligner.align("", "AAA").unwrap_err();
        assert!(matches!(err, AlignError::ScoreOverflow { row: 3, col: 0 }));

        let result = aligner.align("", "AA").unwrap();
        assert_eq!(result.score, -2_000_000_000);
        assert_eq!(result.top, "--");
        assert_eq!(result.bottom, "AA");

        let result = aligner.align("AA", "AT").unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.bridge, "| ");
    }
}

use std::fmt::{Display, Formatter};

use tracing::{debug, trace};

use crate::aligner::matrix::ScoreMatrix;
use crate::aligner::scoring::ScoringPolicy;
use crate::aligner::utils::{alignment_rows, AlignedPair, AlignmentStats};
use crate::errors::AlignError;

/// A single move of the traceback cursor through the score matrix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TracebackStep {
    /// Align `seq1[j - 1]` with `seq2[i - 1]`, moving to `(i - 1, j - 1)`
    Diagonal,

    /// Gap in the first sequence, consuming `seq2[i - 1]` and moving to `(i - 1, j)`
    Up,

    /// Gap in the second sequence, consuming `seq1[j - 1]` and moving to `(i, j - 1)`
    Left,
}

/// Order in which moves are tried when several of them reproduce the score of a cell.
///
/// Of all co-optimal alignments, this selects the one that prefers aligning two symbols over
/// opening a gap, and a gap in the first sequence over a gap in the second sequence.
pub const TRACEBACK_PRIORITY: [TracebackStep; 3] = [
    TracebackStep::Diagonal,
    TracebackStep::Up,
    TracebackStep::Left,
];

/// Outcome of a global alignment: the optimal score, the aligned pairs, and the three
/// rendered rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: i32,

    pub alignment: Vec<AlignedPair>,

    /// First sequence with gaps inserted
    pub top: String,

    /// `|` where both rows hold the same symbol, space otherwise
    pub bridge: String,

    /// Second sequence with gaps inserted
    pub bottom: String,

    pub stats: AlignmentStats,
}

impl AlignmentResult {
    pub fn new(score: i32, seq1: &[u8], seq2: &[u8], alignment: Vec<AlignedPair>) -> Self {
        let (top, bridge, bottom) = alignment_rows(seq1, seq2, &alignment);
        let stats = AlignmentStats::from_pairs(seq1, seq2, &alignment);

        Self { score, alignment, top, bridge, bottom, stats }
    }
}

impl Display for AlignmentResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}\n{}", self.top, self.bridge, self.bottom)
    }
}

/// Does `step` reproduce the score stored at `(i, j)`? Moves that would leave the matrix, or
/// whose score does not fit into an `i32`, never apply.
fn step_applies(
    step: TracebackStep,
    matrix: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    policy: &ScoringPolicy,
    i: usize,
    j: usize,
) -> bool {
    let score = matrix.get(i, j);

    match step {
        TracebackStep::Diagonal => i >= 1 && j >= 1
            && matrix.get(i - 1, j - 1).checked_add(policy.substitution(seq2[i - 1], seq1[j - 1])) == Some(score),
        TracebackStep::Up => i >= 1
            && matrix.get(i - 1, j).checked_add(policy.gap()) == Some(score),
        TracebackStep::Left => j >= 1
            && matrix.get(i, j - 1).checked_add(policy.gap()) == Some(score),
    }
}

/// Reconstruct one optimal alignment from a filled matrix, walking from the bottom-right cell
/// back to the origin. Ties are broken by [`TRACEBACK_PRIORITY`].
///
/// `policy` must be the policy the matrix was filled with. If no move reproduces the score of
/// the current cell, the matrix is inconsistent and [`AlignError::InternalConsistency`] is
/// returned instead of a partial alignment.
pub fn traceback(
    matrix: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    policy: &ScoringPolicy,
) -> Result<AlignmentResult, AlignError> {
    debug_assert_eq!(matrix.cols(), seq1.len() + 1);
    debug_assert_eq!(matrix.rows(), seq2.len() + 1);
    debug!("determining best alignment");

    let mut alignment = Vec::with_capacity(seq1.len() + seq2.len());
    let (mut i, mut j) = (seq2.len(), seq1.len());

    while i >= 1 || j >= 1 {
        let step = TRACEBACK_PRIORITY.into_iter()
            .find(|&step| step_applies(step, matrix, seq1, seq2, policy, i, j))
            .ok_or(AlignError::InternalConsistency { row: i, col: j })?;

        trace!(row = i, col = j, ?step, "traceback step");

        match step {
            TracebackStep::Diagonal => {
                alignment.push(AlignedPair::Aligned(j - 1, i - 1));
                i -= 1;
                j -= 1;
            },
            TracebackStep::Up => {
                alignment.push(AlignedPair::GapInSeq1(i - 1));
                i -= 1;
            },
            TracebackStep::Left => {
                alignment.push(AlignedPair::GapInSeq2(j - 1));
                j -= 1;
            }
        }
    }

    // Pairs were collected from the end of both sequences
    alignment.reverse();

    Ok(AlignmentResult::new(matrix.score(), seq1, seq2, alignment))
}

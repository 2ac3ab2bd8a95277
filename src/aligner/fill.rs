use tracing::debug;

use crate::aligner::matrix::ScoreMatrix;
use crate::aligner::scoring::ScoringPolicy;
use crate::errors::AlignError;

/// Fill all interior cells of an initialized matrix with the Needleman-Wunsch recurrence.
///
/// Cells are visited row-major, so the up, left and up-left neighbours of a cell are always
/// final by the time it is computed. Filling an already filled matrix is a no-op.
///
/// Candidates are compared in `i64`. Returns [`AlignError::ScoreOverflow`] for the first cell
/// whose best score does not fit into an `i32`; cells after it are left untouched.
pub fn fill_scores<'a>(
    matrix: &'a mut ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    policy: &ScoringPolicy,
) -> Result<&'a mut ScoreMatrix, AlignError> {
    debug_assert_eq!(matrix.cols(), seq1.len() + 1);
    debug_assert_eq!(matrix.rows(), seq2.len() + 1);
    debug!("calculating scores for matrix positions");

    let gap = i64::from(policy.gap());
    for i in 1..matrix.rows() {
        for j in 1..matrix.cols() {
            let diagonal = i64::from(matrix.get(i - 1, j - 1))
                + i64::from(policy.substitution(seq2[i - 1], seq1[j - 1]));
            let up = i64::from(matrix.get(i - 1, j)) + gap;
            let left = i64::from(matrix.get(i, j - 1)) + gap;

            let best = i32::try_from(diagonal.max(up).max(left))
                .map_err(|_| AlignError::ScoreOverflow { row: i, col: j })?;

            matrix.set(i, j, best);
        }
    }

    Ok(matrix)
}

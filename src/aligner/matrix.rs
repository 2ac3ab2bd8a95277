use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::aligner::scoring::ScoringPolicy;
use crate::errors::AlignError;

/// Dynamic programming matrix for a pairwise global alignment.
///
/// Rows follow the second sequence and columns the first one, so for sequences of length `n`
/// (first) and `m` (second) the matrix has `m + 1` rows and `n + 1` columns. Cell `(i, j)`
/// holds the best score of `seq2[..i]` aligned against `seq1[..j]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Allocate a matrix for a first sequence of length `seq1_len` and a second sequence of
    /// length `seq2_len`, with row 0 and column 0 holding the cumulative gap penalty.
    pub fn new(seq1_len: usize, seq2_len: usize, policy: &ScoringPolicy) -> Result<Self, AlignError> {
        let rows = seq2_len + 1;
        let cols = seq1_len + 1;
        debug!(rows, cols, "initializing score matrix");

        let mut matrix = Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        };

        for j in 0..cols {
            let score = policy.gap_cost(j)
                .ok_or(AlignError::ScoreOverflow { row: 0, col: j })?;
            matrix.set(0, j, score);
        }

        for i in 0..rows {
            let score = policy.gap_cost(i)
                .ok_or(AlignError::ScoreOverflow { row: i, col: 0 })?;
            matrix.set(i, 0, score);
        }

        Ok(matrix)
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[i32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Score of the full alignment, i.e., the bottom-right cell
    pub fn score(&self) -> i32 {
        self.get(self.rows - 1, self.cols - 1)
    }
}

impl Display for ScoreMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.rows {
            let line: Vec<String> = self.row(i).iter()
                .map(|v| format!("{v:>4}"))
                .collect();

            writeln!(f, "{}", line.join(""))?;
        }

        Ok(())
    }
}

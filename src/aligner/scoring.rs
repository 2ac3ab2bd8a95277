use serde::Serialize;

use crate::errors::AlignError;

pub const DEFAULT_MATCH: i32 = 2;
pub const DEFAULT_MISMATCH: i32 = -1;
pub const DEFAULT_GAP: i32 = -2;

/// Match, mismatch and linear gap scores for one alignment run.
///
/// The fields are private so that every policy in circulation went through [`ScoringPolicy::new`]:
/// `match_score > 0`, `mismatch < 0` and `gap < -1`. Both the score filling stage and the
/// traceback stage must see the same policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoringPolicy {
    match_score: i32,
    mismatch: i32,
    gap: i32,
}

impl ScoringPolicy {
    pub fn new(match_score: i32, mismatch: i32, gap: i32) -> Result<Self, AlignError> {
        if gap >= -1 {
            return Err(AlignError::InvalidGapPenalty(gap));
        }

        if match_score < 1 {
            return Err(AlignError::InvalidMatchScore(match_score));
        }

        if mismatch >= 0 {
            return Err(AlignError::InvalidMismatchScore(mismatch));
        }

        Ok(Self { match_score, mismatch, gap })
    }

    #[inline(always)]
    pub fn match_score(&self) -> i32 {
        self.match_score
    }

    #[inline(always)]
    pub fn mismatch(&self) -> i32 {
        self.mismatch
    }

    #[inline(always)]
    pub fn gap(&self) -> i32 {
        self.gap
    }

    /// Score for aligning symbol `a` against symbol `b`
    #[inline(always)]
    pub fn substitution(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    /// Cost of `length` consecutive gap columns, `None` if it does not fit into an `i32`
    #[inline]
    pub fn gap_cost(&self, length: usize) -> Option<i32> {
        i32::try_from(length).ok()?.checked_mul(self.gap)
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch: DEFAULT_MISMATCH,
            gap: DEFAULT_GAP,
        }
    }
}

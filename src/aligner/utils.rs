use serde::Serialize;

/// One column of an alignment, holding positions into the first and second sequence.
///
/// Every column consumes at least one residue, so there is no variant without a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignedPair {
    /// `seq1[.0]` aligned against `seq2[.1]`, either a match or a mismatch
    Aligned(usize, usize),

    /// `seq2[.0]` against a gap in the first sequence
    GapInSeq1(usize),

    /// `seq1[.0]` against a gap in the second sequence
    GapInSeq2(usize),
}

impl AlignedPair {
    #[inline(always)]
    pub fn seq1_pos(&self) -> Option<usize> {
        match *self {
            Self::Aligned(p1, _) | Self::GapInSeq2(p1) => Some(p1),
            Self::GapInSeq1(_) => None,
        }
    }

    #[inline(always)]
    pub fn seq2_pos(&self) -> Option<usize> {
        match *self {
            Self::Aligned(_, p2) | Self::GapInSeq1(p2) => Some(p2),
            Self::GapInSeq2(_) => None,
        }
    }

    pub fn is_aligned(&self) -> bool {
        matches!(self, Self::Aligned(..))
    }

    pub fn is_indel(&self) -> bool {
        !self.is_aligned()
    }
}

/// Column counts of an alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
}

impl AlignmentStats {
    pub fn from_pairs(seq1: &[u8], seq2: &[u8], aln: &[AlignedPair]) -> Self {
        let mut stats = Self::default();
        for pair in aln {
            match *pair {
                AlignedPair::Aligned(p1, p2) if seq1[p1] == seq2[p2] => stats.matches += 1,
                AlignedPair::Aligned(..) => stats.mismatches += 1,
                AlignedPair::GapInSeq1(_) | AlignedPair::GapInSeq2(_) => stats.gaps += 1,
            }
        }

        stats
    }

    pub fn length(&self) -> usize {
        self.matches + self.mismatches + self.gaps
    }

    /// Fraction of alignment columns with identical symbols, in percent
    pub fn identity(&self) -> f64 {
        if self.length() == 0 {
            return 0.0;
        }

        100.0 * self.matches as f64 / self.length() as f64
    }
}

/// Render an alignment as three rows: the first sequence with gaps, a bridge line with `|`
/// for identical symbols, and the second sequence with gaps.
pub fn alignment_rows(seq1: &[u8], seq2: &[u8], aln: &[AlignedPair]) -> (String, String, String) {
    let mut top = String::with_capacity(aln.len());
    let mut bridge = String::with_capacity(aln.len());
    let mut bottom = String::with_capacity(aln.len());

    for pair in aln {
        match *pair {
            AlignedPair::Aligned(p1, p2) => {
                top.push(char::from(seq1[p1]));
                bridge.push(if seq1[p1] == seq2[p2] { '|' } else { ' ' });
                bottom.push(char::from(seq2[p2]));
            },
            AlignedPair::GapInSeq2(p1) => {
                top.push(char::from(seq1[p1]));
                bridge.push(' ');
                bottom.push('-');
            },
            AlignedPair::GapInSeq1(p2) => {
                top.push('-');
                bridge.push(' ');
                bottom.push(char::from(seq2[p2]));
            },
        }
    }

    (top, bridge, bottom)
}

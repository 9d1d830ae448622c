//! The linear scoring model: one gap penalty and one mismatch penalty.
use crate::{ParamError, Score};
use std::{
    cmp::{max, min},
    ops::RangeInclusive,
};

/// Gap and mismatch penalties, both strictly negative.
///
/// A gap column scores `gap`, a mismatch scores `mismatch`, and a match scores
/// `-mismatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringParameters {
    gap: Score,
    mismatch: Score,
}

impl ScoringParameters {
    pub fn new(gap: Score, mismatch: Score) -> Result<Self, ParamError> {
        if gap >= 0 {
            return Err(ParamError::GapPenalty(gap));
        }
        if mismatch >= 0 {
            return Err(ParamError::MismatchPenalty(mismatch));
        }
        let params = Self { gap, mismatch };
        if !params.fits(0, 0) {
            return Err(ParamError::Overflow {
                gap,
                mismatch,
                size: 0,
            });
        }
        Ok(params)
    }

    /// Whether every score that occurs while aligning sequences of lengths `n`
    /// and `m` fits in a `Score`.
    ///
    /// Cells of the matrix, the intermediate values of the recurrence and the
    /// partial sums of the traceback are all bounded in absolute value by
    /// `(n + m + 1)` times the largest penalty.
    pub fn fits(&self, n: usize, m: usize) -> bool {
        let penalty = max(self.gap.unsigned_abs(), self.mismatch.unsigned_abs()) as u64;
        (n as u64)
            .saturating_add(m as u64)
            .saturating_add(1)
            .checked_mul(penalty)
            .map_or(false, |bound| bound <= Score::MAX as u64)
    }

    pub fn gap(&self) -> Score {
        self.gap
    }

    pub fn mismatch(&self) -> Score {
        self.mismatch
    }

    /// The bonus for aligning two equal symbols.
    #[inline]
    pub fn match_bonus(&self) -> Score {
        -self.mismatch
    }

    /// Score of aligning `a` against `b` on a diagonal step.
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> Score {
        if a == b {
            self.match_bonus()
        } else {
            self.mismatch
        }
    }

    /// The scores reported for an experiment on two length-`size` sequences.
    ///
    /// The maximum is reached by identical sequences. The lowest reachable
    /// score is that of sequences without common symbols, which align either
    /// as `size` mismatches or as `2 * size` gaps, whichever is better. The
    /// range always extends down to `size * gap` as well.
    ///
    /// Panics when `fits(size, size)` does not hold.
    pub fn score_range(&self, size: usize) -> RangeInclusive<Score> {
        assert!(
            self.fits(size, size),
            "Scores of length {size} sequences overflow for {self:?}."
        );
        let size = size as i64;
        let (gap, mismatch) = (self.gap as i64, self.mismatch as i64);
        let lowest = max(mismatch, 2 * gap);
        (size * min(gap, lowest)) as Score..=(size * -mismatch) as Score
    }
}

//! Reconstructing an optimal alignment from a filled [`AlignmentMatrix`].
//!
//! The walk starts in the bottom-right cell and prefers, in this order,
//! a diagonal step, a horizontal step (gap in the query), and a vertical step
//! (gap in the target). The order only matters for ties, and fixes which of
//! several optimal alignments is reported.
use crate::{AlignmentMatrix, ScoringParameters, Score, Seq};
use std::fmt;

pub const GAP: u8 = b'-';
pub const MATCH: u8 = b'|';
pub const NO_MATCH: u8 = b' ';

/// Receives the columns of the alignment, last column first.
pub trait TraceSink {
    fn push(&mut self, top: u8, middle: u8, bottom: u8);
}

/// Discards the columns, for when only the score is needed.
impl TraceSink for () {
    #[inline]
    fn push(&mut self, _top: u8, _middle: u8, _bottom: u8) {}
}

/// The three rows of an alignment, collected in reverse.
#[derive(Default, Debug)]
struct ReversedRows {
    top: Vec<u8>,
    middle: Vec<u8>,
    bottom: Vec<u8>,
}

impl TraceSink for ReversedRows {
    #[inline]
    fn push(&mut self, top: u8, middle: u8, bottom: u8) {
        self.top.push(top);
        self.middle.push(middle);
        self.bottom.push(bottom);
    }
}

fn reversed(row: &[u8]) -> String {
    row.iter().rev().map(|&c| c as char).collect()
}

/// Walk back from the bottom-right cell to `(0, 0)`, pushing each column to
/// `sink`, and return the score accumulated along the way.
pub fn trace_with(
    m: &AlignmentMatrix,
    target: Seq,
    query: Seq,
    params: &ScoringParameters,
    sink: &mut impl TraceSink,
) -> Score {
    assert_eq!(m.rows(), query.len() + 1);
    assert_eq!(m.cols(), target.len() + 1);

    let mut score = 0;
    let mut i = query.len();
    let mut j = target.len();
    while i > 0 || j > 0 {
        if i > 0
            && j > 0
            && m[(i, j)] == m[(i - 1, j - 1)] + params.substitution(query[i - 1], target[j - 1])
        {
            let (t, q) = (target[j - 1], query[i - 1]);
            score += params.substitution(q, t);
            sink.push(t, if t == q { MATCH } else { NO_MATCH }, q);
            i -= 1;
            j -= 1;
        } else if j > 0 && m[(i, j)] == m[(i, j - 1)] + params.gap() {
            // Gap in the query.
            score += params.gap();
            sink.push(target[j - 1], NO_MATCH, GAP);
            j -= 1;
        } else {
            // Gap in the target. Valid because the cell is the max of its three predecessors.
            score += params.gap();
            sink.push(GAP, NO_MATCH, query[i - 1]);
            i -= 1;
        }
    }
    debug_assert_eq!(score, m.score());
    score
}

/// The score of the optimal alignment found by traceback, without building it.
pub fn trace_score(m: &AlignmentMatrix, target: Seq, query: Seq, params: &ScoringParameters) -> Score {
    trace_with(m, target, query, params, &mut ())
}

/// The optimal alignment found by traceback.
pub fn trace(
    m: &AlignmentMatrix,
    target: Seq,
    query: Seq,
    params: &ScoringParameters,
) -> AlignmentResult {
    let mut rows = ReversedRows::default();
    let score = trace_with(m, target, query, params, &mut rows);
    AlignmentResult {
        score,
        top: reversed(&rows.top),
        middle: reversed(&rows.middle),
        bottom: reversed(&rows.bottom),
    }
}

/// A global alignment as three text rows of equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: Score,
    /// The target, with `-` where the query has an extra symbol.
    pub top: String,
    /// `|` under equal symbols, a space elsewhere.
    pub middle: String,
    /// The query, with `-` where the target has an extra symbol.
    pub bottom: String,
}

impl AlignmentResult {
    /// Number of columns in the alignment.
    pub fn len(&self) -> usize {
        self.top.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Check that the rows spell out `target` and `query`, that every column is
    /// a symbol pair or a single gap with the right marker, and return the score
    /// recomputed from the columns.
    pub fn verify(&self, target: Seq, query: Seq, params: &ScoringParameters) -> Score {
        let top = self.top.as_bytes();
        let middle = self.middle.as_bytes();
        let bottom = self.bottom.as_bytes();
        assert_eq!(top.len(), middle.len(), "Rows must have equal length.");
        assert_eq!(top.len(), bottom.len(), "Rows must have equal length.");

        let mut score = 0;
        for ((&t, &m), &b) in top.iter().zip(middle).zip(bottom) {
            score += match (t, b) {
                (GAP, GAP) => panic!("Column with two gaps."),
                (GAP, _) | (_, GAP) => {
                    assert_eq!(m, NO_MATCH);
                    params.gap()
                }
                (t, b) => {
                    assert_eq!(m, if t == b { MATCH } else { NO_MATCH });
                    params.substitution(t, b)
                }
            };
        }
        let ungapped = |row: &[u8]| row.iter().copied().filter(|&c| c != GAP).collect::<Vec<_>>();
        assert_eq!(ungapped(top), target);
        assert_eq!(ungapped(bottom), query);
        score
    }
}

impl fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alignment:")?;
        writeln!(f)?;
        writeln!(f, "{}", self.top)?;
        writeln!(f, "{}", self.middle)?;
        writeln!(f, "{}", self.bottom)?;
        writeln!(f)?;
        writeln!(f, "Score: {}", self.score)
    }
}

//! The Needleman-Wunsch DP matrix and the derived match/mismatch matrix.
//!
//! Rows correspond to the query and columns to the target: cell `(i, j)` holds
//! the optimal score of aligning `query[..i]` against `target[..j]`.
use crate::{ScoringParameters, Score, Seq};
use itertools::Itertools;
use std::{
    cmp::{max, min},
    fmt,
    ops::Index,
};

/// The order in which cells of the DP matrix are computed.
///
/// Both orders respect the dependencies of each cell on its left, upper and
/// upper-left neighbours, and produce identical matrices.
#[derive(clap::ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOrder {
    /// For increasing `i`, compute row `i` right of the diagonal, then column
    /// `i` below the diagonal.
    #[default]
    LShell,
    /// Plain row by row.
    RowMajor,
}

/// A dense `rows x cols` score matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Score>,
}

impl AlignmentMatrix {
    /// A matrix with row 0 and column 0 initialized to `k * gap`.
    /// All other cells are 0 until filled.
    pub fn initialize(rows: usize, cols: usize, gap: Score) -> Self {
        assert!(rows > 0 && cols > 0, "A DP matrix has at least one cell.");
        assert!(
            (max(rows, cols) - 1) as i64 * gap as i64 >= Score::MIN as i64,
            "Gap penalty {gap} overflows the borders of a {rows}x{cols} matrix."
        );
        let mut m = Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        };
        for k in 0..cols {
            m.set(0, k, k as Score * gap);
        }
        for k in 0..rows {
            m.set(k, 0, k as Score * gap);
        }
        m
    }

    /// Initialize and fill the matrix for aligning `query` (rows) against `target` (columns).
    pub fn new(target: Seq, query: Seq, params: &ScoringParameters, order: FillOrder) -> Self {
        assert!(
            params.fits(target.len(), query.len()),
            "Aligning lengths {} and {} overflows for {params:?}.",
            target.len(),
            query.len()
        );
        let mut m = Self::initialize(query.len() + 1, target.len() + 1, params.gap());
        m.fill(target, query, params, order);
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The score of the full alignment, in the bottom-right cell.
    pub fn score(&self) -> Score {
        self[(self.rows - 1, self.cols - 1)]
    }

    pub fn row(&self, i: usize) -> &[Score] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, s: Score) {
        self.data[i * self.cols + j] = s;
    }

    /// Compute cell `(i, j)` from its three predecessors.
    #[inline]
    fn relax(&mut self, i: usize, j: usize, target: Seq, query: Seq, params: &ScoringParameters) {
        let left = self[(i, j - 1)] + params.gap();
        let up = self[(i - 1, j)] + params.gap();
        let diagonal = self[(i - 1, j - 1)] + params.substitution(query[i - 1], target[j - 1]);
        self.set(i, j, max(max(left, up), diagonal));
    }

    /// Fill all cells outside row 0 and column 0.
    pub fn fill(&mut self, target: Seq, query: Seq, params: &ScoringParameters, order: FillOrder) {
        assert_eq!(self.rows, query.len() + 1);
        assert_eq!(self.cols, target.len() + 1);
        match order {
            FillOrder::LShell => {
                // Row i needs row i-1, which is complete up to column i-1 from
                // the previous shells and right of it from the previous row sweep.
                // Columns are symmetric.
                let n = min(self.rows, self.cols);
                for i in 1..n {
                    for j in i..self.cols {
                        self.relax(i, j, target, query, params);
                    }
                    for j in i + 1..self.rows {
                        self.relax(j, i, target, query, params);
                    }
                }
            }
            FillOrder::RowMajor => {
                for i in 1..self.rows {
                    for j in 1..self.cols {
                        self.relax(i, j, target, query, params);
                    }
                }
            }
        }
    }
}

impl Index<(usize, usize)> for AlignmentMatrix {
    type Output = Score;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Score {
        &self.data[i * self.cols + j]
    }
}

impl fmt::Display for AlignmentMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            writeln!(f, "{}", self.row(i).iter().join(" "))?;
        }
        Ok(())
    }
}

/// The score of each diagonal step: `-mismatch` where `query[i] == target[j]`,
/// `mismatch` elsewhere. Recomputed for every pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Score>,
}

impl MatchMatrix {
    pub fn new(target: Seq, query: Seq, params: &ScoringParameters) -> Self {
        Self {
            rows: query.len(),
            cols: target.len(),
            data: query
                .iter()
                .cartesian_product(target)
                .map(|(&q, &t)| params.substitution(q, t))
                .collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl Index<(usize, usize)> for MatchMatrix {
    type Output = Score;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Score {
        &self.data[i * self.cols + j]
    }
}

impl fmt::Display for MatchMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            writeln!(f, "{}", self.data[i * self.cols..(i + 1) * self.cols].iter().join(" "))?;
        }
        Ok(())
    }
}

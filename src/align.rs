use crate::{
    traceback, AlignmentMatrix, AlignmentResult, FillOrder, MatchMatrix, ScoringParameters,
    Score, Seq,
};

/// Needleman-Wunsch aligner with a linear gap penalty.
///
/// Sequences are passed as `(target, query)`: the target runs along the
/// columns of the matrix and is shown on top of the alignment.
#[derive(Debug, Clone, Copy)]
pub struct NeedlemanWunsch {
    pub params: ScoringParameters,
    pub order: FillOrder,
}

impl NeedlemanWunsch {
    pub fn new(params: ScoringParameters) -> Self {
        Self {
            params,
            order: FillOrder::default(),
        }
    }

    pub fn with_order(mut self, order: FillOrder) -> Self {
        self.order = order;
        self
    }

    /// The filled DP matrix.
    pub fn matrix(&self, target: Seq, query: Seq) -> AlignmentMatrix {
        AlignmentMatrix::new(target, query, &self.params, self.order)
    }

    pub fn match_matrix(&self, target: Seq, query: Seq) -> MatchMatrix {
        MatchMatrix::new(target, query, &self.params)
    }

    /// The optimal score, found by traceback without building the alignment.
    pub fn score(&self, target: Seq, query: Seq) -> Score {
        let m = self.matrix(target, query);
        traceback::trace_score(&m, target, query, &self.params)
    }

    /// The optimal alignment and the matrix it was traced in.
    pub fn align(&self, target: Seq, query: Seq) -> (AlignmentMatrix, AlignmentResult) {
        let m = self.matrix(target, query);
        let result = traceback::trace(&m, target, query, &self.params);
        (m, result)
    }
}

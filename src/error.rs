use crate::Score;
use thiserror::Error;

/// Invalid parameters for an alignment or experiment.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    #[error("gap penalty must be negative, got {0}")]
    GapPenalty(Score),
    #[error("mismatch penalty must be negative, got {0}")]
    MismatchPenalty(Score),
    #[error("number of trials must be positive, got {0}")]
    Trials(usize),
    #[error("sequence length must be positive, got {0}")]
    Size(usize),
    #[error("gap penalty {gap} and mismatch penalty {mismatch} overflow a {}-bit score for sequences of length {size}", Score::BITS)]
    Overflow {
        gap: Score,
        mismatch: Score,
        size: usize,
    },
}

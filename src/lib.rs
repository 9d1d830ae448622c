//! Global pairwise alignment using the Needleman-Wunsch dynamic program, and a
//! Monte-Carlo experiment that histograms the optimal score of random pairs.
//!
//! The usual entry points are [`NeedlemanWunsch`] to align a single pair and
//! [`Experiment`] to run many random trials.

pub mod align;
pub mod cli;
pub mod cost_model;
pub mod error;
pub mod experiment;
pub mod generate;
pub mod matrix;
pub mod traceback;

#[cfg(test)]
mod tests;

/// An owned sequence.
pub type Sequence = Vec<u8>;
/// A sequence slice.
pub type Seq<'a> = &'a [u8];
/// The score of a (partial) alignment. Higher is better.
pub type Score = i32;

pub use align::NeedlemanWunsch;
pub use cost_model::ScoringParameters;
pub use error::ParamError;
pub use experiment::{Experiment, ExperimentStats, Histogram, RandomAlignment};
pub use generate::SequenceSource;
pub use matrix::{AlignmentMatrix, FillOrder, MatchMatrix};
pub use traceback::{trace, trace_score, AlignmentResult};

/// Convert a sequence to a printable string.
pub fn seq_to_string(seq: Seq) -> String {
    seq.iter().map(|&c| c as char).collect()
}

use crate::{Experiment, FillOrder, NeedlemanWunsch, ParamError, ScoringParameters, SequenceSource};
use clap::{value_parser, Parser};

/// Histogram the Needleman-Wunsch scores of random DNA sequence pairs, and show
/// the alignment of one more random pair.
#[derive(Parser, Debug)]
#[clap(author, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Score of a gap. Must be negative.
    #[clap(value_parser = value_parser!(i32).range(..0))]
    pub gap_penalty: i32,

    /// Score of a mismatch. Must be negative; a match scores its negation.
    #[clap(value_parser = value_parser!(i32).range(..0))]
    pub mismatch_penalty: i32,

    /// Number of random pairs to align.
    #[clap(value_parser = value_parser!(u32).range(1..))]
    pub trials: u32,

    /// Length of each random sequence.
    #[clap(value_parser = value_parser!(u32).range(1..))]
    pub size: u32,

    /// Seed to initialize RNG for reproducability
    ///
    /// When absent, a random seed is used and printed to stderr.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Order in which the DP matrix is filled.
    #[clap(long, value_enum, default_value_t, hide_short_help = true)]
    pub fill_order: FillOrder,

    /// Only print the histogram, not the single random alignment.
    #[clap(long)]
    pub no_demo: bool,
}

impl Cli {
    pub fn experiment(&self) -> Result<Experiment, ParamError> {
        let params = ScoringParameters::new(self.gap_penalty, self.mismatch_penalty)?;
        Experiment::new(
            NeedlemanWunsch::new(params).with_order(self.fill_order),
            self.trials as usize,
            self.size as usize,
        )
    }

    pub fn source(&self) -> SequenceSource {
        match self.seed {
            Some(seed) => SequenceSource::new(seed),
            None => SequenceSource::from_entropy(),
        }
    }
}

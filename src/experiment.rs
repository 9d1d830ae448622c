//! The Monte-Carlo experiment: the distribution of optimal scores of random pairs.
use crate::{
    traceback, AlignmentMatrix, AlignmentResult, MatchMatrix, NeedlemanWunsch, ParamError,
    Score, SequenceSource, Sequence,
};
use derive_more::AddAssign;
use log::{info, trace};
use std::{fmt, ops::RangeInclusive, time::Instant};

/// Occurrence counts for every score in a fixed range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    min: Score,
    counts: Vec<usize>,
}

impl Histogram {
    pub fn new(range: RangeInclusive<Score>) -> Self {
        let (min, max) = range.into_inner();
        assert!(min <= max, "Empty score range {min}..={max}.");
        Self {
            min,
            counts: vec![0; (max as i64 - min as i64) as usize + 1],
        }
    }

    // Offsets are computed in i64: the span of the range may exceed `Score::MAX`.
    fn score_at(&self, offset: usize) -> Score {
        (self.min as i64 + offset as i64) as Score
    }

    fn offset(&self, score: Score) -> usize {
        (score as i64 - self.min as i64) as usize
    }

    pub fn range(&self) -> RangeInclusive<Score> {
        self.min..=self.score_at(self.counts.len() - 1)
    }

    pub fn add(&mut self, score: Score) {
        assert!(
            self.range().contains(&score),
            "Score {score} outside of histogram range {:?}.",
            self.range()
        );
        let offset = self.offset(score);
        self.counts[offset] += 1;
    }

    pub fn count(&self, score: Score) -> usize {
        if self.range().contains(&score) {
            self.counts[self.offset(score)]
        } else {
            0
        }
    }

    /// Total number of recorded scores.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(score, count)` for every score in the range, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Score, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.score_at(i), c))
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (score, count) in self.iter() {
            writeln!(f, "Score {score} appears {count} times")?;
        }
        Ok(())
    }
}

#[derive(Default, Clone, Copy, AddAssign, Debug)]
pub struct Timing {
    /// generating sequences
    pub generate: f64,
    /// initializing and filling the matrix
    pub fill: f64,
    pub traceback: f64,
}

#[derive(Default, Clone, Copy, AddAssign, Debug)]
pub struct ExperimentStats {
    pub trials: usize,
    pub timing: Timing,
}

impl ExperimentStats {
    /// Header and values, right aligned, as milliseconds per trial.
    pub fn values(&self) -> (Vec<String>, Vec<String>) {
        let per_trial = |t: f64| 1000. * t / self.trials.max(1) as f64;
        [
            ("trials", format!("{}", self.trials)),
            ("gen", format!("{:.4}", per_trial(self.timing.generate))),
            ("fill", format!("{:.4}", per_trial(self.timing.fill))),
            ("trace", format!("{:.4}", per_trial(self.timing.traceback))),
        ]
        .into_iter()
        .map(|(title, val)| {
            let width = title.len().max(val.len());
            (format!("{title:>width$}"), format!("{val:>width$}"))
        })
        .unzip()
    }

    pub fn log(&self) {
        let (header, values) = self.values();
        info!("{}", header.join(" "));
        info!("{}", values.join(" "));
    }
}

/// Validated parameters of an experiment.
#[derive(Debug, Clone, Copy)]
pub struct Experiment {
    pub aligner: NeedlemanWunsch,
    /// Number of random pairs.
    pub trials: usize,
    /// Length of each random sequence.
    pub size: usize,
}

impl Experiment {
    pub fn new(aligner: NeedlemanWunsch, trials: usize, size: usize) -> Result<Self, ParamError> {
        if trials == 0 {
            return Err(ParamError::Trials(trials));
        }
        if size == 0 {
            return Err(ParamError::Size(size));
        }
        let params = aligner.params;
        if !params.fits(size, size) {
            return Err(ParamError::Overflow {
                gap: params.gap(),
                mismatch: params.mismatch(),
                size,
            });
        }
        Ok(Self {
            aligner,
            trials,
            size,
        })
    }

    /// An empty histogram covering every score a trial can produce.
    pub fn histogram(&self) -> Histogram {
        Histogram::new(self.aligner.params.score_range(self.size))
    }

    /// Align `trials` random pairs drawn from `source` and count their scores.
    pub fn run(&self, source: &mut SequenceSource) -> (Histogram, ExperimentStats) {
        let params = &self.aligner.params;
        let mut histogram = self.histogram();
        let mut stats = ExperimentStats::default();
        for k in 0..self.trials {
            let t0 = Instant::now();
            let (target, query) = source.generate_pair(self.size);
            let t1 = Instant::now();
            let m = AlignmentMatrix::new(&target, &query, params, self.aligner.order);
            let t2 = Instant::now();
            let score = traceback::trace_score(&m, &target, &query, params);
            let t3 = Instant::now();

            trace!("trial {k}: score {score}");
            histogram.add(score);
            stats += ExperimentStats {
                trials: 1,
                timing: Timing {
                    generate: (t1 - t0).as_secs_f64(),
                    fill: (t2 - t1).as_secs_f64(),
                    traceback: (t3 - t2).as_secs_f64(),
                },
            };
        }
        (histogram, stats)
    }

    /// Align one fresh random pair of length `size`, keeping everything needed to show it.
    pub fn random_alignment(&self, source: &mut SequenceSource) -> RandomAlignment {
        let (target, query) = source.generate_pair(self.size);
        let (matrix, result) = self.aligner.align(&target, &query);
        let match_matrix = self.aligner.match_matrix(&target, &query);
        RandomAlignment {
            target,
            query,
            matrix,
            match_matrix,
            result,
        }
    }
}

/// A single random pair with its matrices and alignment.
#[derive(Debug, Clone)]
pub struct RandomAlignment {
    pub target: Sequence,
    pub query: Sequence,
    pub matrix: AlignmentMatrix,
    pub match_matrix: MatchMatrix,
    pub result: AlignmentResult,
}

impl fmt::Display for RandomAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Random alignment in length of {}", self.target.len())?;
        writeln!(f)?;
        writeln!(f, "Matrix of values according to the algorithm:")?;
        writeln!(f)?;
        writeln!(f, "{}", self.matrix)?;
        writeln!(f, "Matrix of Match/misMatch scores:")?;
        writeln!(f)?;
        writeln!(f, "{}", self.match_matrix)?;
        write!(f, "{}", self.result)
    }
}

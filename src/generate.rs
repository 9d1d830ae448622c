//! Uniform random DNA sequences.
use crate::Sequence;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const ALPH: [u8; 4] = [b'A', b'C', b'T', b'G'];

fn rand_char(rng: &mut impl Rng) -> u8 {
    ALPH[rng.gen_range(0..4)]
}

/// Generate a sequence of length `n` with each symbol drawn uniformly from `ALPH`.
pub fn random_sequence(n: usize, rng: &mut impl Rng) -> Sequence {
    (0..n).map(|_| rand_char(rng)).collect()
}

/// A seeded source of random sequences.
///
/// All randomness of an experiment flows through one source, so that a run is
/// reproducible from its seed.
pub struct SequenceSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SequenceSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh seed from the OS and print it to stderr, so the run can be
    /// replayed with `--seed`.
    pub fn from_entropy() -> Self {
        let seed = ChaCha8Rng::from_entropy().gen_range(0..u64::MAX);
        eprintln!("Seed: {seed}");
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&mut self, n: usize) -> Sequence {
        random_sequence(n, &mut self.rng)
    }

    /// Generate a `(target, query)` pair of independent sequences of length `n`.
    pub fn generate_pair(&mut self, n: usize) -> (Sequence, Sequence) {
        let target = self.generate(n);
        let query = self.generate(n);
        (target, query)
    }
}

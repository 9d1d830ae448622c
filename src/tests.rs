use crate::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn params(gap: Score, mismatch: Score) -> ScoringParameters {
    ScoringParameters::new(gap, mismatch).unwrap()
}

/// Independent score-only DP keeping two rows.
fn reference_score(target: Seq, query: Seq, p: &ScoringParameters) -> Score {
    let mut prev = (0..=target.len() as Score).map(|j| j * p.gap()).collect::<Vec<_>>();
    for (i, &q) in query.iter().enumerate() {
        let mut next = vec![(i as Score + 1) * p.gap(); target.len() + 1];
        for (j, &t) in target.iter().enumerate() {
            next[j + 1] = (prev[j] + p.substitution(q, t))
                .max(prev[j + 1] + p.gap())
                .max(next[j] + p.gap());
        }
        prev = next;
    }
    prev[target.len()]
}

fn test_sequences() -> Vec<(Seq<'static>, Seq<'static>)> {
    vec![
        (b"", b""),
        (b"A", b""),
        (b"", b"ACGT"),
        (b"A", b"C"),
        (b"ACGT", b"ACGT"),
        (b"AAAA", b"CCCC"),
        (b"ACTGACCAGT", b"CCGACAGGA"),
        (b"AGTTTTAT", b"ACCGATTTTTA"),
        (b"CTCTCTTCTCTCTCTA", b"CCTCTCTCTCTCCTCTC"),
        (b"GCACGTCGCCCCCCGCCCGCG", b"GCCCGCCCGCCCGCCCCCGCCCCC"),
    ]
}

fn random_pairs() -> impl Iterator<Item = (Sequence, Sequence)> {
    let mut rng = ChaCha8Rng::seed_from_u64(31415);
    (0..200).map(move |_| {
        let n = rng.gen_range(0..30);
        let m = rng.gen_range(0..30);
        (
            generate::random_sequence(n, &mut rng),
            generate::random_sequence(m, &mut rng),
        )
    })
}

const PARAMS: [(Score, Score); 5] = [(-1, -2), (-1, -1), (-2, -1), (-1, -5), (-3, -2)];

#[test]
fn invalid_parameters() {
    assert_eq!(ScoringParameters::new(0, -1), Err(ParamError::GapPenalty(0)));
    assert_eq!(ScoringParameters::new(-1, 2), Err(ParamError::MismatchPenalty(2)));
    let nw = NeedlemanWunsch::new(params(-1, -2));
    assert_eq!(Experiment::new(nw, 0, 5).unwrap_err(), ParamError::Trials(0));
    assert_eq!(Experiment::new(nw, 5, 0).unwrap_err(), ParamError::Size(0));
}

#[test]
fn initialization() {
    for gap in [-1, -3] {
        let m = AlignmentMatrix::initialize(4, 6, gap);
        for k in 0..6 {
            assert_eq!(m[(0, k)], k as Score * gap);
        }
        for k in 0..4 {
            assert_eq!(m[(k, 0)], k as Score * gap);
        }
    }
}

#[test]
fn matrix_display() {
    let p = params(-1, -2);
    let m = AlignmentMatrix::new(b"A", b"A", &p, FillOrder::LShell);
    assert_eq!(m.to_string(), "0 -1\n-1 2\n");
    let mm = MatchMatrix::new(b"AC", b"A", &p);
    assert_eq!((mm.rows(), mm.cols()), (1, 2));
    assert_eq!(mm.to_string(), "2 -2\n");
    // One empty line per query symbol when the target is empty.
    assert_eq!(MatchMatrix::new(b"", b"AC", &p).to_string(), "\n\n");
    assert_eq!(MatchMatrix::new(b"AC", b"", &p).to_string(), "");
}

#[test]
fn fill_orders_agree() {
    for (gap, mismatch) in PARAMS {
        let p = params(gap, mismatch);
        for (a, b) in random_pairs() {
            let shell = AlignmentMatrix::new(&a, &b, &p, FillOrder::LShell);
            let rows = AlignmentMatrix::new(&a, &b, &p, FillOrder::RowMajor);
            assert_eq!(shell, rows, "{} {}", seq_to_string(&a), seq_to_string(&b));
            assert_eq!(shell.score(), reference_score(&a, &b, &p));
        }
    }
}

#[test]
fn traceback_score_is_matrix_score() {
    for (gap, mismatch) in PARAMS {
        let p = params(gap, mismatch);
        let nw = NeedlemanWunsch::new(p);
        let pairs = test_sequences()
            .into_iter()
            .map(|(a, b)| (a.to_vec(), b.to_vec()))
            .chain(random_pairs());
        for (a, b) in pairs {
            let (m, r) = nw.align(&a, &b);
            assert_eq!(r.score, m[(b.len(), a.len())]);
            assert_eq!(r.score, nw.score(&a, &b));
            assert_eq!(r.verify(&a, &b, &p), r.score);
            assert!(r.len() >= a.len().max(b.len()));
            assert!(r.len() <= a.len() + b.len());
        }
    }
}

#[test]
fn identical_sequences() {
    let nw = NeedlemanWunsch::new(params(-1, -2));
    let (_, r) = nw.align(b"ACGT", b"ACGT");
    assert_eq!(r.score, 8);
    assert_eq!(r.top, "ACGT");
    assert_eq!(r.middle, "||||");
    assert_eq!(r.bottom, "ACGT");

    let s = generate::random_sequence(50, &mut ChaCha8Rng::seed_from_u64(1));
    assert_eq!(NeedlemanWunsch::new(params(-3, -1)).score(&s, &s), 50);
}

#[test]
fn all_mismatches_prefer_diagonal() {
    let nw = NeedlemanWunsch::new(params(-1, -2));
    let (m, r) = nw.align(b"AAAA", b"CCCC");
    // Every cell ties between all three moves.
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(m[(i, j)], -((i + j) as Score));
        }
    }
    assert_eq!(r.score, -8);
    assert_eq!(r.top, "AAAA");
    assert_eq!(r.middle, "    ");
    assert_eq!(r.bottom, "CCCC");
}

#[test]
fn horizontal_before_vertical() {
    let nw = NeedlemanWunsch::new(params(-1, -5));
    let (_, r) = nw.align(b"A", b"C");
    assert_eq!(r.score, -2);
    assert_eq!(r.top, "-A");
    assert_eq!(r.middle, "  ");
    assert_eq!(r.bottom, "C-");
}

#[test]
fn empty_sequences() {
    let nw = NeedlemanWunsch::new(params(-2, -1));
    let (_, r) = nw.align(b"ACG", b"");
    assert_eq!(r.score, -6);
    assert_eq!((r.top.as_str(), r.bottom.as_str()), ("ACG", "---"));

    let (_, r) = nw.align(b"", b"AC");
    assert_eq!(r.score, -4);
    assert_eq!((r.top.as_str(), r.bottom.as_str()), ("--", "AC"));

    let (m, r) = nw.align(b"", b"");
    assert_eq!((m.rows(), m.cols()), (1, 1));
    assert_eq!(r.score, 0);
    assert!(r.is_empty());
}

#[test]
fn swap_symmetry() {
    for (gap, mismatch) in PARAMS {
        let nw = NeedlemanWunsch::new(params(gap, mismatch));
        for (a, b) in random_pairs() {
            assert_eq!(nw.score(&a, &b), nw.score(&b, &a));
        }
    }
}

#[test]
fn score_range_bounds() {
    assert_eq!(params(-1, -2).score_range(4), -8..=8);
    assert_eq!(params(-1, -5).score_range(4), -8..=20);
    assert_eq!(params(-1, -2).score_range(0), 0..=0);
    // A mismatch is cheaper than a gap: the range still starts at `size * gap`.
    assert_eq!(params(-3, -1).score_range(5), -15..=5);
    assert_eq!(params(-2, -1).score_range(5), -10..=5);

    for (gap, mismatch) in PARAMS {
        let p = params(gap, mismatch);
        let nw = NeedlemanWunsch::new(p);
        let range = p.score_range(4);
        assert!(*range.start() <= 4 * gap);
        // The top is attained by identical sequences.
        assert_eq!(nw.score(b"ACGT", b"ACGT"), *range.end());
        // The lowest reachable score is inside the range.
        let lowest = nw.score(b"AAAA", b"CCCC");
        assert_eq!(lowest, 4 * mismatch.max(2 * gap));
        assert!(range.contains(&lowest));
        if mismatch <= gap {
            assert_eq!(lowest, *range.start());
        }
    }
}

#[test]
fn overflowing_penalties() {
    assert_eq!(
        ScoringParameters::new(-1, Score::MIN),
        Err(ParamError::Overflow {
            gap: -1,
            mismatch: Score::MIN,
            size: 0
        })
    );
    assert!(ScoringParameters::new(Score::MIN, -1).is_err());

    // Lengths 1 and 1 need 3 times the largest penalty.
    let largest = Score::MAX / 3;
    let p = params(-1, -largest);
    assert!(p.fits(1, 1));
    assert!(!p.fits(1, 2));
    assert_eq!(NeedlemanWunsch::new(p).score(b"A", b"A"), largest);
    assert_eq!(NeedlemanWunsch::new(p).score(b"A", b"C"), -2);
    assert!(Experiment::new(NeedlemanWunsch::new(p), 1, 1).is_ok());

    let p = params(-largest - 1, -1);
    assert!(!p.fits(1, 1));
    assert_eq!(
        Experiment::new(NeedlemanWunsch::new(p), 1, 1).unwrap_err(),
        ParamError::Overflow {
            gap: -largest - 1,
            mismatch: -1,
            size: 1
        }
    );
    assert!(Experiment::new(NeedlemanWunsch::new(params(-2_000_000_000, -1)), 1, 1).is_err());
}

#[test]
#[should_panic]
fn overflowing_alignment_panics() {
    NeedlemanWunsch::new(params(-2_000_000_000, -1)).score(b"AC", b"AC");
}

#[test]
fn histogram_counts() {
    let mut h = Histogram::new(-2..=3);
    for s in [-2, 0, 0, 3] {
        h.add(s);
    }
    assert_eq!(h.total(), 4);
    assert_eq!(h.count(0), 2);
    assert_eq!(h.count(1), 0);
    assert_eq!(h.count(10), 0);
    assert_eq!(h.iter().count(), 6);
    assert_eq!(
        h.to_string().lines().next(),
        Some("Score -2 appears 1 times")
    );
    assert_eq!(h.to_string().lines().nth(3), Some("Score 1 appears 0 times"));
}

#[test]
#[should_panic]
fn histogram_out_of_range() {
    Histogram::new(0..=3).add(4);
}

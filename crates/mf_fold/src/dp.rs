//! Weighted base-pair maximization.
//!
//! Both tables are addressed by `(start, span)`: the entry at `(i, k)`
//! describes the sub-sequence `i..=i+k`. Entries with a span too short to
//! enclose a hairpin loop are never written and stay `0` / `None`.

use std::fmt;
use log::{debug, trace};
use ndarray::Array2;
use rayon::prelude::*;

use mf_structure::NAIDX;
use mf_structure::PairSet;

use crate::Base;
use crate::NucleotideVec;
use crate::PairScore;
use crate::FoldError;
use crate::traceback;

/// The sub-sequence `start..=start+span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: usize,
    pub span: usize,
}

impl Interval {
    pub fn new(start: usize, span: usize) -> Self {
        Self { start, span }
    }

    /// Last position of the interval, `None` on overflow.
    pub fn end(&self) -> Option<usize> {
        self.start.checked_add(self.span)
    }

    fn index(&self) -> (usize, usize) {
        (self.start, self.span)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(start {}, span {})", self.start, self.span)
    }
}

/// How the optimum of an interval was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backpointer {
    /// Base case: nothing pairs inside the interval.
    #[default]
    None,
    /// The last position is unpaired, continue with the shorter interval.
    Skip(Interval),
    /// First and last position pair, continue with the enclosed interval.
    PairEnds(Interval),
    /// The last position pairs with an interior position; left remainder
    /// and enclosed interval are independent.
    Split(Interval, Interval),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillStrategy {
    #[default]
    Serial,
    /// Spans in increasing order, all starts of one span concurrently.
    Parallel,
}

/// Score and backpointer tables of one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingDP {
    scores: Array2<f64>,
    trace: Array2<Backpointer>,
}

impl<P: PairScore + Sync> TryFrom<(&str, &P)> for PairingDP {
    type Error = FoldError;

    fn try_from((sequence, policy): (&str, &P)) -> Result<Self, Self::Error> {
        let sequence = NucleotideVec::try_from(sequence)?;
        PairingDP::fill(&sequence, policy)
    }
}

impl PairingDP {
    pub fn fill<P: PairScore + Sync>(sequence: &[Base], policy: &P) -> Result<Self, FoldError> {
        Self::fill_with(sequence, policy, FillStrategy::Serial, |_| {})
    }

    pub fn fill_parallel<P: PairScore + Sync>(sequence: &[Base], policy: &P) -> Result<Self, FoldError> {
        Self::fill_with(sequence, policy, FillStrategy::Parallel, |_| {})
    }

    /// Fill both tables. `on_span(k)` is called whenever all entries
    /// of span `k` are final.
    pub fn fill_with<P, F>(
        sequence: &[Base],
        policy: &P,
        strategy: FillStrategy,
        mut on_span: F,
    ) -> Result<Self, FoldError>
    where
        P: PairScore + Sync,
        F: FnMut(usize),
    {
        let n = sequence.len();
        if n > NAIDX::MAX as usize {
            return Err(FoldError::SequenceTooLong { length: n, max: NAIDX::MAX as usize });
        }
        let min_span = min_pair_span(policy);
        debug!("Filling {n}x{n} tables ({strategy:?}), pairs need span >= {min_span}.");

        let mut scores = Array2::<f64>::zeros((n, n));
        let mut trace = Array2::from_elem((n, n), Backpointer::None);

        for k in min_span..n {
            match strategy {
                FillStrategy::Serial => {
                    for i in 0..n - k {
                        let (value, bp) = best_entry(sequence, policy, &scores, i, k);
                        scores[(i, k)] = value;
                        trace[(i, k)] = bp;
                    }
                }
                FillStrategy::Parallel => {
                    let row: Vec<(f64, Backpointer)> = (0..n - k)
                        .into_par_iter()
                        .map(|i| best_entry(sequence, policy, &scores, i, k))
                        .collect();
                    for (i, (value, bp)) in row.into_iter().enumerate() {
                        scores[(i, k)] = value;
                        trace[(i, k)] = bp;
                    }
                }
            }
            trace!("span {k} done");
            on_span(k);
        }

        Ok(PairingDP { scores, trace })
    }

    /// Sequence length.
    pub fn len(&self) -> usize {
        self.scores.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Best score of the whole sequence.
    pub fn optimum(&self) -> f64 {
        match self.len() {
            0 => 0.0,
            n => self.scores[(0, n - 1)],
        }
    }

    /// Panics if the interval lies outside the table.
    pub fn score(&self, interval: Interval) -> f64 {
        self.scores[interval.index()]
    }

    /// Panics if the interval lies outside the table.
    pub fn backpointer(&self, interval: Interval) -> Backpointer {
        self.trace[interval.index()]
    }

    pub fn scores(&self) -> &Array2<f64> {
        &self.scores
    }

    pub fn backpointers(&self) -> &Array2<Backpointer> {
        &self.trace
    }

    /// Pairs of one optimal structure.
    pub fn traceback(&self) -> Result<PairSet, FoldError> {
        traceback(&self.trace)
    }
}

/// Shortest span that can hold a pair: both ends plus the hairpin loop.
fn min_pair_span<P: PairScore>(policy: &P) -> usize {
    policy.min_hairpin_size().max(1) + 1
}

/// Optimum and backpointer for interval `(i, k)`. Reads only entries of
/// span < k, which are final by the time this is called.
fn best_entry<P: PairScore>(
    sequence: &[Base],
    policy: &P,
    scores: &Array2<f64>,
    i: usize,
    k: usize,
) -> (f64, Backpointer) {
    let j = i + k;
    let hairpin = min_pair_span(policy) - 1;
    let unpaired = scores[(i, k - 1)];

    // Only replaced on strict improvement: the smallest t wins ties.
    let mut best: Option<(f64, usize)> = None;
    for t in i..j - hairpin {
        if !policy.can_pair(sequence[t], sequence[j]) {
            continue;
        }
        let inner = if t == i {
            scores[(i + 1, k - 2)]
        } else {
            scores[(i, t - i - 1)] + scores[(t + 1, j - t - 2)]
        };
        let candidate = policy.pair_score(sequence[t], sequence[j]) + inner;
        if best.is_none_or(|(value, _)| candidate > value) {
            best = Some((candidate, t));
        }
    }

    match best {
        Some((value, t)) if value > unpaired => {
            if t == i {
                (value, Backpointer::PairEnds(Interval::new(i + 1, k - 2)))
            } else {
                (value, Backpointer::Split(
                    Interval::new(i, t - i - 1),
                    Interval::new(t + 1, j - t - 2),
                ))
            }
        }
        _ => (unpaired, Backpointer::Skip(Interval::new(i, k - 1))),
    }
}

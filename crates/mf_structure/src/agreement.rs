//! Agreement between a predicted and a reference pair list.

use std::fmt;
use nohash_hasher::IntSet;

use crate::Pair;
use crate::P1KEY;

/// Count the entries of `candidate` that also occur in `reference`.
///
/// This is a containment count, not a symmetric intersection: duplicates
/// in `candidate` are counted once per occurrence.
pub fn count_shared(candidate: &[Pair], reference: &[Pair]) -> usize {
    let reference: IntSet<P1KEY> = reference.iter().map(|p| p.key()).collect();
    candidate.iter().filter(|p| reference.contains(&p.key())).count()
}

/// Shared-pair count together with the sizes it should be read against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agreement {
    pub shared: usize,
    pub candidate: usize,
    pub reference: usize,
}

impl Agreement {
    pub fn new(candidate: &[Pair], reference: &[Pair]) -> Self {
        Self {
            shared: count_shared(candidate, reference),
            candidate: candidate.len(),
            reference: reference.len(),
        }
    }

    /// Fraction of reference pairs that were predicted.
    pub fn sensitivity(&self) -> Option<f64> {
        (self.reference > 0).then(|| self.shared as f64 / self.reference as f64)
    }

    /// Positive predictive value: fraction of predicted pairs that are in the reference.
    pub fn ppv(&self) -> Option<f64> {
        (self.candidate > 0).then(|| self.shared as f64 / self.candidate as f64)
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ratio = |r: Option<f64>| r.map_or("-".to_string(), |v| format!("{:.3}", v));
        write!(f, "shared {} (predicted {}, reference {}) sensitivity {} ppv {}",
            self.shared, self.candidate, self.reference,
            ratio(self.sensitivity()), ratio(self.ppv()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_shared() {
        let candidate = [Pair::new(0, 8), Pair::new(1, 7)];
        let reference = [Pair::new(1, 7), Pair::new(2, 6)];
        assert_eq!(count_shared(&candidate, &reference), 1);
        assert_eq!(count_shared(&reference, &candidate), 1);
    }

    #[test]
    fn test_count_shared_is_asymmetric_with_duplicates() {
        let candidate = [Pair::new(1, 7), Pair::new(1, 7), Pair::new(0, 8)];
        let reference = [Pair::new(1, 7)];
        assert_eq!(count_shared(&candidate, &reference), 2);
        assert_eq!(count_shared(&reference, &candidate), 1);
    }

    #[test]
    fn test_count_shared_empty() {
        assert_eq!(count_shared(&[], &[Pair::new(0, 5)]), 0);
        assert_eq!(count_shared(&[Pair::new(0, 5)], &[]), 0);
    }

    #[test]
    fn test_agreement_ratios() {
        let candidate = [Pair::new(0, 8), Pair::new(1, 7)];
        let reference = [Pair::new(1, 7), Pair::new(2, 6), Pair::new(3, 5)];
        let a = Agreement::new(&candidate, &reference);
        assert_eq!(a.shared, 1);
        assert_eq!(a.sensitivity(), Some(1.0 / 3.0));
        assert_eq!(a.ppv(), Some(0.5));
        assert_eq!(format!("{}", a), "shared 1 (predicted 2, reference 3) sensitivity 0.333 ppv 0.500");
    }

    #[test]
    fn test_agreement_without_pairs() {
        let a = Agreement::new(&[], &[]);
        assert_eq!(a.sensitivity(), None);
        assert_eq!(a.ppv(), None);
        assert_eq!(format!("{}", a), "shared 0 (predicted 0, reference 0) sensitivity - ppv -");
    }
}

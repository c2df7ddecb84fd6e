use crate::Base;
use crate::PairTypeRNA;

/// Default contribution of a G-C closing pair in the weighted policy.
pub const GC_BONUS: f64 = 5.53;
/// Default contribution of an A-U closing pair in the weighted policy.
pub const AU_BONUS: f64 = 4.42;
/// Unpaired positions required between the two positions of a pair.
pub const MIN_HAIRPIN_SIZE: usize = 4;

/// Decides which pairs may form and what each of them is worth.
///
/// Implementations are plain values without interior state, so a
/// single policy can be shared by all workers of a parallel fill.
pub trait PairScore {
    /// Watson-Crick compatibility: A-U and G-C, in both orientations.
    fn can_pair(&self, b1: Base, b2: Base) -> bool {
        PairTypeRNA::from((b1, b2)).is_wcf()
    }

    /// Non-negative contribution of the pair (b1, b2). Only called for
    /// pairs that pass `can_pair`.
    fn pair_score(&self, b1: Base, b2: Base) -> f64;

    fn min_hairpin_size(&self) -> usize {
        MIN_HAIRPIN_SIZE
    }
}

/// Every pair is worth 1, the optimum is the number of pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CountingPolicy;

impl PairScore for CountingPolicy {
    fn pair_score(&self, _b1: Base, _b2: Base) -> f64 {
        1.0
    }
}

/// Pairs closed by G-C are worth more than those closed by A-U, a crude
/// stand-in for their relative stacking stability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedPolicy {
    pub gc_bonus: f64,
    pub au_bonus: f64,
}

impl Default for WeightedPolicy {
    fn default() -> Self {
        Self {
            gc_bonus: GC_BONUS,
            au_bonus: AU_BONUS,
        }
    }
}

impl PairScore for WeightedPolicy {
    fn pair_score(&self, b1: Base, b2: Base) -> f64 {
        if PairTypeRNA::from((b1, b2)).is_gc() {
            self.gc_bonus
        } else {
            self.au_bonus
        }
    }
}

/// Run-time choice between the available policies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringScheme {
    Counting,
    Weighted(WeightedPolicy),
}

impl Default for ScoringScheme {
    fn default() -> Self {
        ScoringScheme::Weighted(WeightedPolicy::default())
    }
}

impl PairScore for ScoringScheme {
    fn can_pair(&self, b1: Base, b2: Base) -> bool {
        match self {
            ScoringScheme::Counting => CountingPolicy.can_pair(b1, b2),
            ScoringScheme::Weighted(w) => w.can_pair(b1, b2),
        }
    }

    fn pair_score(&self, b1: Base, b2: Base) -> f64 {
        match self {
            ScoringScheme::Counting => CountingPolicy.pair_score(b1, b2),
            ScoringScheme::Weighted(w) => w.pair_score(b1, b2),
        }
    }

    fn min_hairpin_size(&self) -> usize {
        match self {
            ScoringScheme::Counting => CountingPolicy.min_hairpin_size(),
            ScoringScheme::Weighted(w) => w.min_hairpin_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Base::*;

    #[test]
    fn test_can_pair_watson_crick_only() {
        let model = CountingPolicy;
        assert!(model.can_pair(A, U));
        assert!(model.can_pair(U, A));
        assert!(model.can_pair(C, G));
        assert!(model.can_pair(G, C));
        assert!(!model.can_pair(G, U));
        assert!(!model.can_pair(U, G));
        assert!(!model.can_pair(A, G));
        assert!(!model.can_pair(C, C));
    }

    #[test]
    fn test_counting_scores() {
        assert_eq!(CountingPolicy.pair_score(G, C), 1.0);
        assert_eq!(CountingPolicy.pair_score(A, U), 1.0);
        assert_eq!(CountingPolicy.min_hairpin_size(), 4);
    }

    #[test]
    fn test_weighted_scores() {
        let model = WeightedPolicy::default();
        assert_eq!(model.pair_score(G, C), 5.53);
        assert_eq!(model.pair_score(C, G), 5.53);
        assert_eq!(model.pair_score(A, U), 4.42);
        assert_eq!(model.pair_score(U, A), 4.42);
    }

    #[test]
    fn test_weighted_custom_bonus() {
        let model = WeightedPolicy { gc_bonus: 3.0, au_bonus: 2.0 };
        assert_eq!(model.pair_score(C, G), 3.0);
        assert_eq!(model.pair_score(U, A), 2.0);
    }

    #[test]
    fn test_scheme_delegates() {
        let counting = ScoringScheme::Counting;
        let weighted = ScoringScheme::default();
        assert_eq!(counting.pair_score(G, C), 1.0);
        assert_eq!(weighted.pair_score(G, C), GC_BONUS);
        assert!(!weighted.can_pair(G, U));
        assert_eq!(weighted.min_hairpin_size(), MIN_HAIRPIN_SIZE);
    }

    #[test]
    fn test_custom_policy_uses_defaults() {
        struct Flat;
        impl PairScore for Flat {
            fn pair_score(&self, _: Base, _: Base) -> f64 { 2.5 }
        }
        assert!(Flat.can_pair(A, U));
        assert!(!Flat.can_pair(A, A));
        assert_eq!(Flat.min_hairpin_size(), MIN_HAIRPIN_SIZE);
    }
}

use clap::Args;
use clap::ValueEnum;
use anyhow::Result;
use anyhow::bail;
use log::debug;

use mf_fold::AU_BONUS;
use mf_fold::GC_BONUS;
use mf_fold::FillStrategy;
use mf_fold::ScoringScheme;
use mf_fold::WeightedPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoringChoice {
    /// Every Watson-Crick pair scores 1.
    Counting,
    /// G-C and A-U pairs score --gc-bonus and --au-bonus.
    Weighted,
}

/// Pair scoring parameters.
#[derive(Debug, Args)]
pub struct ScoringArguments {
    /// Pair scoring policy
    #[arg(short, long, value_enum, default_value_t = ScoringChoice::Weighted)]
    pub scoring: ScoringChoice,

    /// Score of a G-C pair (weighted policy)
    #[arg(long, default_value_t = GC_BONUS)]
    pub gc_bonus: f64,

    /// Score of an A-U pair (weighted policy)
    #[arg(long, default_value_t = AU_BONUS)]
    pub au_bonus: f64,

    /// Fill the tables with all available threads
    #[arg(long)]
    pub parallel: bool,
}

impl ScoringArguments {
    /// Validate that all parameters make sense.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("gc-bonus", self.gc_bonus), ("au-bonus", self.au_bonus)] {
            if !value.is_finite() || value < 0.0 {
                bail!("--{} must be a non-negative number (got {})", name, value);
            }
        }
        Ok(())
    }

    pub fn build_scheme(&self) -> ScoringScheme {
        debug!("Scoring policy: {:?}", self.scoring);
        match self.scoring {
            ScoringChoice::Counting => ScoringScheme::Counting,
            ScoringChoice::Weighted => {
                debug!("Pair scores: G-C {}, A-U {}", self.gc_bonus, self.au_bonus);
                ScoringScheme::Weighted(WeightedPolicy {
                    gc_bonus: self.gc_bonus,
                    au_bonus: self.au_bonus,
                })
            }
        }
    }

    pub fn strategy(&self) -> FillStrategy {
        if self.parallel {
            FillStrategy::Parallel
        } else {
            FillStrategy::Serial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        scoring: ScoringArguments,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["test"]);
        assert!(cli.scoring.validate().is_ok());
        assert_eq!(cli.scoring.build_scheme(), ScoringScheme::Weighted(WeightedPolicy::default()));
        assert_eq!(cli.scoring.strategy(), FillStrategy::Serial);
    }

    #[test]
    fn test_counting_parallel() {
        let cli = TestCli::parse_from(["test", "--scoring", "counting", "--parallel"]);
        assert_eq!(cli.scoring.build_scheme(), ScoringScheme::Counting);
        assert_eq!(cli.scoring.strategy(), FillStrategy::Parallel);
    }

    #[test]
    fn test_custom_bonus() {
        let cli = TestCli::parse_from(["test", "--gc-bonus", "3", "--au-bonus", "2"]);
        assert_eq!(cli.scoring.build_scheme(),
            ScoringScheme::Weighted(WeightedPolicy { gc_bonus: 3.0, au_bonus: 2.0 }));
    }

    #[test]
    fn test_negative_bonus_is_rejected() {
        let cli = TestCli::parse_from(["test", "--au-bonus=-1"]);
        let err = cli.scoring.validate().unwrap_err();
        assert_eq!(err.to_string(), "--au-bonus must be a non-negative number (got -1)");
    }
}

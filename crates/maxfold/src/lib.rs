//! # maxfold
//!
//! Unified API for RNA secondary structure prediction by weighted
//! base-pair maximization.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod input_parsers;
pub mod scoring_parsers;

pub mod structure {
    pub use ::mf_structure::*;
}

pub mod fold {
    pub use ::mf_fold::*;
}

use std::io::Write;
use anyhow::Result;
use env_logger::Builder;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use log::info;
use serde::Serialize;

use mf_fold::Base;
use mf_fold::FillStrategy;
use mf_fold::PairingDP;
use mf_fold::ScoringScheme;
use mf_structure::Pair;
use mf_structure::PairSet;
use mf_structure::DotBracketVec;

/// -v = info, -vv = debug, -vvv = trace; messages without prefix.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

/// Outcome of folding one sequence.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub dp: PairingDP,
    pub pairs: PairSet,
    pub structure: DotBracketVec,
}

/// Fill, trace back and render. With `progress` an indicatif bar
/// advances once per completed span.
pub fn predict(
    sequence: &[Base],
    scheme: &ScoringScheme,
    strategy: FillStrategy,
    progress: bool,
) -> Result<Prediction> {
    let pb = if progress {
        let pb = ProgressBar::new(sequence.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let dp = PairingDP::fill_with(sequence, scheme, strategy, |k| pb.set_position(k as u64 + 1))?;
    pb.finish_and_clear();

    let pairs = dp.traceback()?;
    let structure = DotBracketVec::try_from(&pairs)?;
    info!("{} pairs, optimum {:.2}", pairs.len(), dp.optimum());
    Ok(Prediction { dp, pairs, structure })
}

/// JSON view of a prediction.
#[derive(Debug, Serialize)]
pub struct FoldReport {
    pub header: Option<String>,
    pub sequence: String,
    pub structure: String,
    pub score: f64,
    pub pairs: Vec<Pair>,
}

impl FoldReport {
    pub fn new(header: Option<&str>, sequence: &[Base], prediction: &Prediction) -> Self {
        Self {
            header: header.map(str::to_string),
            sequence: sequence.iter().map(|&b| char::from(b)).collect(),
            structure: prediction.structure.to_string(),
            score: prediction.dp.optimum(),
            pairs: prediction.pairs.to_vec(),
        }
    }
}

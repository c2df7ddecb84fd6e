//! The mf_fold crate.
//!
//! Secondary structure prediction by weighted base-pair maximization:
//!  - RNA sequences (Base, NucleotideVec)
//!  - pair scoring policies
//!  - the score/backpointer tables and their traceback
//!

/// Base, NucleotideVec, PairTypeRNA, ....
mod nucleotides;

/// The pair scoring trait and the shipped policies.
mod scoring;

/// Filling the tables.
mod dp;

/// Backpointers to pairs.
mod traceback;

mod error;

pub use nucleotides::*;
pub use scoring::*;
pub use dp::*;
pub use traceback::*;
pub use error::*;

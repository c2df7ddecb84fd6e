use std::fmt;

use crate::Interval;
use crate::SequenceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldError {
    /// The input string is not an RNA sequence.
    InvalidNucleotide(SequenceError),
    /// Positions must fit into `NAIDX`.
    SequenceTooLong { length: usize, max: usize },
    /// The backpointer table was not produced by `PairingDP` (or got
    /// corrupted afterwards). Never expected for a freshly filled table.
    InternalInconsistency { interval: Interval, reason: &'static str },
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldError::InvalidNucleotide(e) => write!(f, "{}", e),
            FoldError::SequenceTooLong { length, max } => {
                write!(f, "Sequence of length {} exceeds the maximum of {}", length, max)
            }
            FoldError::InternalInconsistency { interval, reason } => {
                write!(f, "Inconsistent backpointer at interval {}: {}", interval, reason)
            }
        }
    }
}

impl std::error::Error for FoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FoldError::InvalidNucleotide(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SequenceError> for FoldError {
    fn from(e: SequenceError) -> Self {
        FoldError::InvalidNucleotide(e)
    }
}

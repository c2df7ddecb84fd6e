use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    UnmatchedOpen(usize),                // '(' at this position was never closed
    UnmatchedClose(usize),               // ')' at this position has no matching '('
    InvalidToken(String, String, usize), // invalid token, source and position
    PseudoknotToken(char, usize),        // extended bracket at this position
    OutOfRangeOrOverlap { position: usize, length: usize },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnmatchedOpen(i) => {
                write!(f, "Unmatched '(' at position {}", i)
            }
            StructureError::UnmatchedClose(i) => {
                write!(f, "Unmatched ')' at position {}", i)
            }
            StructureError::InvalidToken(tok, src, i) => {
                write!(f, "Invalid {} in {} at position {}", tok, src, i)
            }
            StructureError::PseudoknotToken(c, i) => {
                write!(f, "Crossing-pair bracket '{}' at position {} is not supported", c, i)
            }
            StructureError::OutOfRangeOrOverlap { position, length } if position >= length => {
                write!(f, "Pair position {} is out of range for length {}", position, length)
            }
            StructureError::OutOfRangeOrOverlap { position, .. } => {
                write!(f, "Position {} is used by more than one pair", position)
            }
        }
    }
}

impl std::error::Error for StructureError {}

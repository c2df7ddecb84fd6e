use std::fmt;
use std::ops::Deref;
use std::convert::TryFrom;

use crate::Pair;
use crate::PairSet;
use crate::PairList;
use crate::StructureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired, // '.'
    Open,     // '('
    Close,    // ')'
}

/// Brackets of the extended notation used to annotate crossing pairs.
pub const CROSSING_BRACKETS: [char; 6] = ['[', ']', '<', '>', '{', '}'];

impl TryFrom<char> for DotBracket {
    type Error = StructureError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open),
            ')' => Ok(DotBracket::Close),
            c if CROSSING_BRACKETS.contains(&c) => Err(StructureError::PseudoknotToken(c, 0)),
            _ => Err(StructureError::InvalidToken(format!("character '{}'", c), "dot-bracket".into(), 0)),
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Open => '(',
            DotBracket::Close => ')',
            DotBracket::Unpaired => '.',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl Deref for DotBracketVec {
    type Target = [DotBracket];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DotBracketVec {
    /// The open chain: every position unpaired.
    pub fn unpaired(length: usize) -> Self {
        DotBracketVec(vec![DotBracket::Unpaired; length])
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match DotBracket::try_from(c) {
                Ok(db) => vec.push(db),
                Err(StructureError::InvalidToken(tok, src, _)) => {
                    return Err(StructureError::InvalidToken(tok, src, i));
                }
                Err(StructureError::PseudoknotToken(c, _)) => {
                    return Err(StructureError::PseudoknotToken(c, i));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(DotBracketVec(vec))
    }
}

/// Render pairs as dot-bracket string of the given length.
///
/// Every pair puts '(' at its 5' position and ')' at its 3' position.
/// Fails if a position lies outside `0..length` or is used twice.
pub fn to_bracket_notation<'a, I>(pairs: I, length: usize) -> Result<DotBracketVec, StructureError>
where
    I: IntoIterator<Item = &'a Pair>,
{
    let mut result = DotBracketVec::unpaired(length);
    for pair in pairs {
        let (i, j) = <(usize, usize)>::from(*pair);
        for (pos, db) in [(i, DotBracket::Open), (j, DotBracket::Close)] {
            match result.0.get_mut(pos) {
                Some(slot) if *slot == DotBracket::Unpaired => *slot = db,
                _ => return Err(StructureError::OutOfRangeOrOverlap { position: pos, length }),
            }
        }
    }
    Ok(result)
}

impl TryFrom<&PairSet> for DotBracketVec {
    type Error = StructureError;

    fn try_from(ps: &PairSet) -> Result<Self, Self::Error> {
        to_bracket_notation(&ps.to_vec(), ps.length())
    }
}

impl TryFrom<&PairList> for DotBracketVec {
    type Error = StructureError;

    fn try_from(pl: &PairList) -> Result<Self, Self::Error> {
        to_bracket_notation(pl.iter(), pl.length())
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for db in &self.0 {
            write!(f, "{}", char::from(*db))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_bracket_from_char() {
        assert_eq!(DotBracket::try_from('.').unwrap(), DotBracket::Unpaired);
        assert_eq!(DotBracket::try_from('(').unwrap(), DotBracket::Open);
        assert_eq!(DotBracket::try_from(')').unwrap(), DotBracket::Close);
    }

    #[test]
    fn test_char_from_dot_bracket() {
        assert_eq!(char::from(DotBracket::Unpaired), '.');
        assert_eq!(char::from(DotBracket::Open), '(');
        assert_eq!(char::from(DotBracket::Close), ')');
    }

    #[test]
    fn test_dot_bracket_from_invalid_char() {
        let res = DotBracket::try_from('x');
        assert!(matches!(res, Err(StructureError::InvalidToken(_, src, _)) if src == "dot-bracket"));
        let res = DotBracket::try_from('+');
        assert!(matches!(res, Err(StructureError::InvalidToken(..))));
    }

    #[test]
    fn test_dot_bracket_from_crossing_bracket() {
        for c in CROSSING_BRACKETS {
            assert_eq!(DotBracket::try_from(c), Err(StructureError::PseudoknotToken(c, 0)));
        }
    }

    #[test]
    fn test_dot_bracket_vec_from_str() {
        let dbv = DotBracketVec::try_from("(.).").unwrap();
        assert_eq!(format!("{}", dbv), "(.).");
        assert_eq!(dbv.len(), 4);
        assert_eq!(dbv[0], DotBracket::Open);
        assert_eq!(dbv[1], DotBracket::Unpaired);
        assert_eq!(dbv[2], DotBracket::Close);
        assert_eq!(dbv[3], DotBracket::Unpaired);
    }

    #[test]
    fn test_dot_bracket_vec_reports_position() {
        let err = DotBracketVec::try_from("((..x))").unwrap_err();
        assert_eq!(format!("{}", err), "Invalid character 'x' in dot-bracket at position 4");
        let err = DotBracketVec::try_from("((.[.]))").unwrap_err();
        assert_eq!(err, StructureError::PseudoknotToken('[', 3));
    }

    #[test]
    fn test_to_bracket_notation() {
        let pairs = [Pair::new(0, 8), Pair::new(1, 7)];
        let dbv = to_bracket_notation(&pairs, 9).unwrap();
        assert_eq!(dbv.to_string(), "((.....))");
    }

    #[test]
    fn test_to_bracket_notation_empty() {
        let dbv = to_bracket_notation(&[], 5).unwrap();
        assert_eq!(dbv.to_string(), ".....");
        let dbv = to_bracket_notation(&[], 0).unwrap();
        assert_eq!(dbv.to_string(), "");
    }

    #[test]
    fn test_to_bracket_notation_out_of_range() {
        let pairs = [Pair::new(0, 9)];
        let err = to_bracket_notation(&pairs, 9).unwrap_err();
        assert_eq!(err, StructureError::OutOfRangeOrOverlap { position: 9, length: 9 });
        assert_eq!(format!("{}", err), "Pair position 9 is out of range for length 9");
    }

    #[test]
    fn test_to_bracket_notation_overlap() {
        let pairs = [Pair::new(0, 8), Pair::new(0, 7)];
        let err = to_bracket_notation(&pairs, 9).unwrap_err();
        assert_eq!(err, StructureError::OutOfRangeOrOverlap { position: 0, length: 9 });
        assert_eq!(format!("{}", err), "Position 0 is used by more than one pair");

        let pairs = [Pair::new(0, 4), Pair::new(4, 8)];
        let err = to_bracket_notation(&pairs, 9).unwrap_err();
        assert_eq!(err, StructureError::OutOfRangeOrOverlap { position: 4, length: 9 });
    }

    #[test]
    fn test_dot_bracket_vec_from_pair_set() {
        let mut ps = PairSet::new(6);
        ps.insert(Pair::new(1, 4));
        ps.insert(Pair::new(0, 5));
        let dbv = DotBracketVec::try_from(&ps).unwrap();
        assert_eq!(dbv.to_string(), "((..))");
    }
}

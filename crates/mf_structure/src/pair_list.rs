use std::ops::Deref;
use std::convert::TryFrom;
use log::warn;

use crate::NAIDX;
use crate::Pair;
use crate::StructureError;
use crate::{DotBracket, DotBracketVec};

/// An ordered list of base pairs on a strand of the given length.
///
/// Pairs appear in the order their closing bracket was read, i.e.
/// inner pairs before the pairs enclosing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairList {
    length: usize,
    pairs: Vec<Pair>,
}

impl PairList {
    pub fn new(length: usize, pairs: Vec<Pair>) -> Self {
        Self { length, pairs }
    }

    /// Underlying sequence length.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn into_pairs(self) -> Vec<Pair> {
        self.pairs
    }
}

impl Deref for PairList {
    type Target = [Pair];

    fn deref(&self) -> &Self::Target {
        &self.pairs
    }
}

fn close_pair(stack: &mut Vec<usize>, pairs: &mut Vec<Pair>, i: usize) -> Result<(), StructureError> {
    let j = stack.pop().ok_or(StructureError::UnmatchedClose(i))?;
    if i >= NAIDX::MAX as usize {
        return Err(StructureError::OutOfRangeOrOverlap { position: i, length: NAIDX::MAX as usize });
    }
    pairs.push(Pair::new(j as NAIDX, i as NAIDX));
    Ok(())
}

/// Shared scanner: returns the pairs and the positions of crossing-pair
/// brackets, which are only tolerated if `flag_crossing` is set.
fn scan_brackets(text: &str, flag_crossing: bool) -> Result<(PairList, Vec<usize>), StructureError> {
    let mut stack = Vec::new();
    let mut pairs = Vec::new();
    let mut flagged = Vec::new();
    let mut length = 0;

    for (i, c) in text.chars().enumerate() {
        length += 1;
        match DotBracket::try_from(c) {
            Ok(DotBracket::Open) => stack.push(i),
            Ok(DotBracket::Close) => close_pair(&mut stack, &mut pairs, i)?,
            Ok(DotBracket::Unpaired) => (),
            Err(StructureError::PseudoknotToken(_, _)) if flag_crossing => flagged.push(i),
            Err(StructureError::PseudoknotToken(c, _)) => {
                return Err(StructureError::PseudoknotToken(c, i));
            }
            Err(_) => {
                return Err(StructureError::InvalidToken(format!("character '{}'", c), "structure".to_string(), i));
            }
        }
    }

    if let Some(i) = stack.pop() {
        return Err(StructureError::UnmatchedOpen(i));
    }
    Ok((PairList::new(length, pairs), flagged))
}

/// Parse a plain dot-bracket string into its list of pairs.
///
/// Extended brackets that annotate crossing pairs are rejected.
pub fn from_bracket_notation(text: &str) -> Result<PairList, StructureError> {
    scan_brackets(text, false).map(|(pl, _)| pl)
}

/// Parse a dot-bracket string that may carry extended (crossing-pair)
/// brackets. Those positions are not turned into pairs; they are treated
/// as unpaired and returned alongside the pair list.
pub fn from_bracket_notation_flagged(text: &str) -> Result<(PairList, Vec<usize>), StructureError> {
    let (pl, flagged) = scan_brackets(text, true)?;
    if !flagged.is_empty() {
        warn!("Ignored {} crossing-pair bracket(s), first at position {}.", flagged.len(), flagged[0]);
    }
    Ok((pl, flagged))
}

impl TryFrom<&str> for PairList {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        from_bracket_notation(s)
    }
}

impl TryFrom<&DotBracketVec> for PairList {
    type Error = StructureError;

    fn try_from(db: &DotBracketVec) -> Result<Self, Self::Error> {
        let mut stack: Vec<usize> = Vec::new();
        let mut pairs = Vec::new();

        for (i, dot) in db.iter().enumerate() {
            match dot {
                DotBracket::Open => stack.push(i),
                DotBracket::Close => close_pair(&mut stack, &mut pairs, i)?,
                DotBracket::Unpaired => {}
            }
        }

        if let Some(i) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(i));
        }
        Ok(PairList::new(db.len(), pairs))
    }
}

use ndarray::Array2;

use mf_structure::NAIDX;
use mf_structure::Pair;
use mf_structure::PairSet;

use crate::Backpointer;
use crate::FoldError;
use crate::Interval;

fn inconsistent(interval: Interval, reason: &'static str) -> FoldError {
    FoldError::InternalInconsistency { interval, reason }
}

/// A referenced interval must lie inside the table and be strictly
/// shorter than the interval referring to it.
fn checked_child(child: Interval, parent: Interval, n: usize) -> Result<Interval, FoldError> {
    if child.end().is_none_or(|end| end >= n) {
        return Err(inconsistent(child, "referenced interval exceeds the table"));
    }
    if child.span >= parent.span {
        return Err(inconsistent(parent, "referenced interval does not shrink"));
    }
    Ok(child)
}

/// The pair enclosing `inner`, which must lie within `parent`.
fn enclosing_pair(inner: Interval, parent: Interval) -> Result<Pair, FoldError> {
    let (Some(i), Some(j)) = (inner.start.checked_sub(1), inner.end().and_then(|e| e.checked_add(1))) else {
        return Err(inconsistent(parent, "pair lies outside the sequence"));
    };
    match parent.end() {
        Some(end) if i >= parent.start && j <= end => Ok(Pair::new(i as NAIDX, j as NAIDX)),
        _ => Err(inconsistent(parent, "pair lies outside its interval")),
    }
}

/// Walk the backpointers from the full-length interval and collect the
/// pairs of one optimal structure.
pub fn traceback(trace: &Array2<Backpointer>) -> Result<PairSet, FoldError> {
    let (n, m) = trace.dim();
    if n != m {
        return Err(inconsistent(Interval::new(0, m), "backpointer table is not square"));
    }
    if n > NAIDX::MAX as usize {
        return Err(FoldError::SequenceTooLong { length: n, max: NAIDX::MAX as usize });
    }

    let mut pairs = PairSet::new(n);
    if n == 0 {
        return Ok(pairs);
    }

    let mut stack = vec![Interval::new(0, n - 1)];
    while let Some(iv) = stack.pop() {
        match trace[(iv.start, iv.span)] {
            Backpointer::None => {}
            Backpointer::Skip(rest) => {
                stack.push(checked_child(rest, iv, n)?);
            }
            Backpointer::PairEnds(inner) => {
                let inner = checked_child(inner, iv, n)?;
                pairs.insert(enclosing_pair(inner, iv)?);
                stack.push(inner);
            }
            Backpointer::Split(left, inner) => {
                let left = checked_child(left, iv, n)?;
                let inner = checked_child(inner, iv, n)?;
                pairs.insert(enclosing_pair(inner, iv)?);
                stack.push(left);
                stack.push(inner);
            }
        }
    }
    Ok(pairs)
}

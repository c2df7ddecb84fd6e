//! The mf_structure crate.
//!
//! Secondary structure representations for a single nucleic acid strand:
//!  - Pair, PairSet and PairList
//!  - dot-bracket notation (and conversions from/to pair lists)
//!  - agreement between a predicted and a reference pair list
//!
mod error;
mod pair_set;
mod pair_list;
mod dotbracket;
mod agreement;

pub use error::*;
pub use pair_set::*;
pub use pair_list::*;
pub use dotbracket::*;
pub use agreement::*;

/// Nucleic Acid INdeX: we use `u16` (0 to 65k), which is plenty for nucleic acids.
/// Should you ever want to fold longer sequences, beware that `P1KEY` needs to
/// be *twice as large* (in bits) as `NAIDX`, since pairs `(NAIDX, NAIDX)` are
/// compacted into one `P1KEY`.
pub type NAIDX = u16;

/// Pair key. Must be >= 2×`NAIDX` in bit width so we can safely pack two indices.
pub type P1KEY = u32;

/// Compile-time sanity check: 2×NAIDX bits must fit into P1KEY.
const _: () = {
    assert!(2 * NAIDX::BITS <= P1KEY::BITS);
};

use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::{anyhow, Result};
use paste::paste;
use mf_fold::NucleotideVec;

// ============================================================
//  Generic FASTA-like parser supporting lenient/strict modes
// ============================================================

/// One input record: optional `>header`, a sequence and an optional
/// structure line. The structure is kept as text, since only the caller
/// knows whether extended brackets are acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: Option<String>,
    pub sequence: NucleotideVec,
    pub structure: Option<String>,
}

impl FastaRecord {
    /// Header without the leading '>' and anything after the first space.
    pub fn name(&self) -> &str {
        self.header.as_deref()
            .and_then(|h| h.strip_prefix('>'))
            .and_then(|s| s.split_whitespace().next())
            .unwrap_or("anonymous")
    }
}

#[derive(Clone, Copy)]
enum FastaMode {
    Lenient,
    Strict,
}

/// Core parsing logic shared by all adapters.
fn parse_fasta_like<R: BufRead>(reader: R, mode: FastaMode) -> Result<FastaRecord> {
    let mut header: Option<String> = None;
    let mut sequence: Option<NucleotideVec> = None;
    let mut structure: Option<String> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            if sequence.is_some() {
                break;
            } else {
                continue;
            }
        }

        if line.starts_with('>') && sequence.is_none() {
            header = Some(line.to_string());
        } else if sequence.is_none() {
            sequence = Some(NucleotideVec::try_from(line)?);
        } else {
            // The structure may be followed by an energy column.
            let token = line.split_whitespace().next().unwrap_or_default();
            structure = Some(token.to_string());
            break;
        }
    }

    let sequence = sequence.ok_or_else(|| anyhow!("Missing sequence line"))?;

    if let (None, FastaMode::Strict) = (&structure, mode) {
        return Err(anyhow!("Missing structure line"));
    }

    if let Some(s) = &structure {
        let length = s.chars().count();
        if sequence.len() != length {
            return Err(anyhow!(
                "Sequence length ({}) and structure length ({}) do not match",
                sequence.len(),
                length
            ));
        }
    }

    Ok(FastaRecord { header, sequence, structure })
}

// ============================================================
//  Base parser functions (lenient and strict variants)
// ============================================================

/// Structure line optional.
pub fn read_fasta_like<R: BufRead>(reader: R) -> Result<FastaRecord> {
    parse_fasta_like(reader, FastaMode::Lenient)
}

/// Structure line required.
pub fn read_reference<R: BufRead>(reader: R) -> Result<FastaRecord> {
    parse_fasta_like(reader, FastaMode::Strict)
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
///
/// Example:
/// ```ignore
/// define_input_variants!(read_fasta_like, Result<FastaRecord>);
/// ```
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

define_input_variants!(read_fasta_like, Result<FastaRecord>);
define_input_variants!(read_reference, Result<FastaRecord>);

// ============================================================
//  Output helper: ruler()
// ============================================================

pub fn ruler(len: usize) -> String {
    let mut s = String::new();
    let mut c = 0;
    for i in 0..=len {
        if i % 10 == 0 {
            let t = format!("{}", i / 10);
            c = t.len() - 1;
            s.push_str(&t);
            continue;
        } else if c > 0 {
            c -= 1;
            continue;
        }
        if i % 10 == 5 {
            s.push(',');
        } else {
            s.push('.');
        }
    }
    s
}

// ============================================================
//  Unit tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruler() {
        assert_eq!(ruler(0), "0");
        assert_eq!(ruler(5), "0....,");
        assert_eq!(ruler(10), "0....,....1");
    }

    #[test]
    fn test_read_fasta_like_basic() {
        let input = ">test hairpin\ngggaaaccc\n((....)).\n";
        let record = read_fasta_like_string(input).unwrap();
        assert_eq!(record.header, Some(">test hairpin".into()));
        assert_eq!(record.name(), "test");
        assert_eq!(record.sequence.to_string(), "GGGAAACCC");
        assert_eq!(record.structure.as_deref(), Some("((....))."));
    }

    #[test]
    fn test_read_fasta_like_without_structure() {
        let record = read_fasta_like_string("GGGAAACCC\n").unwrap();
        assert_eq!(record.header, None);
        assert_eq!(record.name(), "anonymous");
        assert_eq!(record.structure, None);
    }

    #[test]
    fn test_read_fasta_like_skips_leading_blank_lines() {
        let record = read_fasta_like_string("\n\n>x\n\nACGU\n").unwrap();
        assert_eq!(record.sequence.to_string(), "ACGU");
    }

    #[test]
    fn test_read_fasta_like_keeps_spaced_sequence() {
        let record = read_fasta_like_string(">x\nGGGA AACCC\n((....)). -2.00\n").unwrap();
        assert_eq!(record.sequence.to_string(), "GGGAAACCC");
        assert_eq!(record.structure.as_deref(), Some("((....))."));

        let err = read_fasta_like_string(">x\nGGGA AACCC -2.00\n").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported nucleotide '-' at position 11");
    }

    #[test]
    fn test_read_rejects_invalid_nucleotide() {
        let err = read_fasta_like_string(">x\nACGT\n").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported nucleotide 'T' at position 3");
    }

    #[test]
    fn test_read_rejects_missing_sequence() {
        assert!(read_fasta_like_string(">only a header\n").is_err());
        assert!(read_fasta_like_string("").is_err());
    }

    #[test]
    fn test_read_reference_strict_mode() {
        let ok = read_reference_string(">test\nACGUACGU\n........\n");
        assert!(ok.is_ok());

        let missing = read_reference_string(">test\nACGU\n");
        assert!(missing.is_err(), "Missing structure line should fail in strict mode");
    }

    #[test]
    fn test_read_reference_keeps_extended_brackets() {
        let record = read_reference_string("GGGGAAACCCCAAA\n((..[[..))..]]\n").unwrap();
        assert_eq!(record.structure.as_deref(), Some("((..[[..))..]]"));
    }

    #[test]
    fn test_length_mismatch() {
        let err = read_reference_string("ACGUACGU\n....\n").unwrap_err();
        assert_eq!(err.to_string(), "Sequence length (8) and structure length (4) do not match");
    }
}

use clap::Parser;
use anyhow::Result;
use anyhow::bail;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::prelude::IndexedRandom;

use mf_fold::Base;
use mf_fold::NucleotideVec;

/// Generate random sequences from a given alphabet.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random RNA sequences", long_about = None)]
struct Args {
    /// Alphabet to choose from, comma-separated (e.g., A,C,G,U)
    #[arg(short, long, default_value = "A,C,G,U")]
    alphabet: String,

    /// Length of each generated sequence
    #[arg(short, long, default_value_t = 50)]
    length: usize,

    /// Number of sequences to generate
    #[arg(short, long, default_value_t = 1)]
    num: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_alphabet(alphabet: &str) -> Result<Vec<Base>> {
    let mut bases = Vec::new();
    for token in alphabet.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => bases.push(Base::try_from(c)?),
            _ => bail!("Alphabet entries must be single nucleotides, got '{}'", token),
        }
    }
    if bases.is_empty() {
        bail!("Empty alphabet");
    }
    Ok(bases)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let alphabet = parse_alphabet(&args.alphabet)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for i in 0..args.num {
        let seq: Vec<Base> = (0..args.length)
            .filter_map(|_| alphabet.choose(&mut rng).copied())
            .collect();
        println!(">random_{}\n{}", i, NucleotideVec::from(seq));
    }
    Ok(())
}

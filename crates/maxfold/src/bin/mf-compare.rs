use log::info;
use colored::*;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;
use anyhow::anyhow;

use mf_structure::Agreement;
use mf_structure::to_bracket_notation;
use mf_structure::from_bracket_notation;
use mf_structure::from_bracket_notation_flagged;

use maxfold::predict;
use maxfold::init_logging;
use maxfold::input_parsers::ruler;
use maxfold::input_parsers::read_reference_input;
use maxfold::scoring_parsers::ScoringArguments;


#[derive(Debug, Args)]
pub struct CompareInput {
    /// Input file (FASTA-like, sequence and reference structure), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Treat crossing-pair brackets ([]<>{}) of the reference as unpaired
    /// instead of rejecting the reference
    #[arg(long)]
    pub skip_pseudoknots: bool,
}


#[derive(Debug, Parser)]
#[command(name = "mf-compare")]
#[command(author, version, about = "Compare a predicted RNA secondary structure with a reference")]
pub struct Cli {
    #[command(flatten)]
    pub compare: CompareInput,

    #[command(flatten, next_help_heading = "Scoring parameters")]
    pub scoring: ScoringArguments,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.compare.verbose);
    cli.scoring.validate()?;

    let scheme = cli.scoring.build_scheme();
    let record = read_reference_input(&cli.compare.input)?;
    let reference = record.structure.as_deref()
        .ok_or_else(|| anyhow!("Missing reference structure"))?;

    let reference = if cli.compare.skip_pseudoknots {
        let (pairs, flagged) = from_bracket_notation_flagged(reference)?;
        info!("Crossing-pair positions treated as unpaired: {:?}", flagged);
        pairs
    } else {
        from_bracket_notation(reference)?
    };

    let prediction = predict(&record.sequence, &scheme, cli.scoring.strategy(), false)?;
    let predicted = prediction.pairs.to_vec();
    let agreement = Agreement::new(&predicted, &reference);

    if let Some(h) = &record.header {
        println!("{}", h.yellow())
    }
    info!("{}", ruler(record.sequence.len().saturating_sub(1)).magenta());
    println!("{}", record.sequence);
    println!("{} {}", prediction.structure,
        format!("{:>7.2}", prediction.dp.optimum()).green());
    println!("{} {}", to_bracket_notation(reference.iter(), reference.length())?,
        "reference".cyan());
    println!("{}", agreement);

    Ok(())
}

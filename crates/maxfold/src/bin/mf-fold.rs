use log::{debug, info};
use colored::*;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use maxfold::predict;
use maxfold::init_logging;
use maxfold::FoldReport;
use maxfold::input_parsers::ruler;
use maxfold::input_parsers::read_fasta_like_input;
use maxfold::scoring_parsers::ScoringArguments;


#[derive(Debug, Args)]
pub struct FoldInput {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Show a progress bar while filling the tables
    #[arg(long)]
    pub progress: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}


#[derive(Debug, Parser)]
#[command(name = "mf-fold")]
#[command(author, version, about = "Predict an RNA secondary structure by weighted base-pair maximization")]
pub struct Cli {
    #[command(flatten)]
    pub fold: FoldInput,

    #[command(flatten, next_help_heading = "Scoring parameters")]
    pub scoring: ScoringArguments,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.fold.verbose);
    cli.scoring.validate()?;

    let scheme = cli.scoring.build_scheme();
    let record = read_fasta_like_input(&cli.fold.input)?;
    if record.structure.is_some() {
        debug!("Ignoring the structure line of {}.", record.name());
    }

    let prediction = predict(&record.sequence, &scheme, cli.scoring.strategy(), cli.fold.progress)?;

    if cli.fold.json {
        let report = FoldReport::new(record.header.as_deref(), &record.sequence, &prediction);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(h) = &record.header {
        println!("{}", h.yellow())
    }
    info!("{}", ruler(record.sequence.len().saturating_sub(1)).magenta());
    println!("{}\n{} {}",
        record.sequence,
        prediction.structure,
        format!("{:>7.2}", prediction.dp.optimum()).green());
    info!("{}", ruler(record.sequence.len().saturating_sub(1)).magenta());

    Ok(())
}

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "adscore",
    version,
    about = "Quality scoring and ranking for real-estate listings"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Reference instant for the scoring pass (RFC 3339), defaults to now
    #[arg(long, global = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every ad and print them in input order
    Score(ScoreCommand),
    /// Print ads scoring 40 or more, best first
    Public(ViewCommand),
    /// Print ads scoring below 40, best first
    Quality(ViewCommand),
    /// Print the accent- and case-folded form of each text
    Normalize(NormalizeCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub data: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    /// Write scores and irrelevance dates back into the data file
    #[arg(long)]
    pub persist: bool,
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Args)]
pub struct ViewCommand {
    pub data: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Args)]
pub struct NormalizeCommand {
    #[arg(required = true)]
    pub texts: Vec<String>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

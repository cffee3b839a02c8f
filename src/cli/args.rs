//! Command line argument parsing for the Contrail CLI using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::dataset::sentiment::Sentiment;

/// Contrail - sentiment dashboards over airline social posts
#[derive(Parser, Debug, Clone)]
#[command(name = "contrail")]
#[command(about = "Filter, summarize and score airline social posts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ContrailArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "CONTRAIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ContrailArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show totals, shares, the daily series and the per-airline breakdown
    Summary(SummaryArgs),

    /// Show the text corpus and top terms for one sentiment
    Corpus(CorpusArgs),

    /// List the airlines in a dataset
    Airlines(AirlinesArgs),

    /// Score a piece of text with the lexicon classifier
    Classify(ClassifyArgs),
}

/// Filter selection shared by the dataset commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Restrict to one airline ("All" for every airline)
    #[arg(short, long)]
    pub airline: Option<String>,

    /// First day of the date range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Last day of the date range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Sentiments to keep (comma separated)
    #[arg(short, long, value_delimiter = ',', conflicts_with = "no_sentiments")]
    pub sentiment: Vec<Sentiment>,

    /// Deselect every sentiment
    #[arg(long)]
    pub no_sentiments: bool,

    /// Reject inverted or half-open date ranges and unknown airlines
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the summary command
#[derive(Parser, Debug, Clone)]
pub struct SummaryArgs {
    /// Dataset file (overrides the configured path)
    #[arg(short, long, value_name = "DATA_FILE")]
    pub data: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the corpus command
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Dataset file (overrides the configured path)
    #[arg(short, long, value_name = "DATA_FILE")]
    pub data: Option<PathBuf>,

    /// Sentiment whose corpus to build
    #[arg(long = "for", value_name = "SENTIMENT")]
    pub target: Sentiment,

    /// Number of terms to show
    #[arg(short, long, default_value = "20")]
    pub top: usize,

    /// Print the joined corpus text as well
    #[arg(long)]
    pub show_text: bool,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the airlines command
#[derive(Parser, Debug, Clone)]
pub struct AirlinesArgs {
    /// Dataset file (overrides the configured path)
    #[arg(short, long, value_name = "DATA_FILE")]
    pub data: Option<PathBuf>,
}

/// Arguments for the classify command
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Text to score; several values are scored as a batch
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::aggregation::DuplicatePolicy;
use crate::scoring::ScoringMode;
use crate::synthetic::DemoScenario;

#[derive(Parser, Debug)]
#[command(name = "geoscore")]
#[command(
    about = "Turn per-country evaluation logs into choropleth-ready statistics",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .geoscore.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate an evaluation log into context and risk statistics
    Aggregate {
        /// Log file (JSON), or '-' to read stdin
        log: PathBuf,

        #[command(flatten)]
        aggregation: AggregationArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Generate a random log with a 70/20/10 accurate/moderate/hallucinated split
    Simulate {
        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Countries to simulate (comma-separated)
        #[arg(long, value_delimiter = ',')]
        countries: Option<Vec<String>>,

        /// Write the generated log instead of its statistics
        #[arg(long)]
        emit_log: bool,

        #[command(flatten)]
        aggregation: AggregationArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Derive a demo scenario from an existing log
    Demo {
        /// Base log file (JSON), or '-' to read stdin
        log: PathBuf,

        /// Scenario to build
        #[arg(long, value_enum, default_value = "gdp")]
        scenario: DemoScenario,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Write the derived log instead of its statistics
        #[arg(long)]
        emit_log: bool,

        #[command(flatten)]
        aggregation: AggregationArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Print a prompt that asks a chat model for a log on a topic
    Prompt {
        /// Research topic
        topic: Option<String>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct AggregationArgs {
    /// Scoring mode; repeat or comma-separate to render several modes from one read
    #[arg(short, long, value_enum, value_delimiter = ',', env = "GEOSCORE_MODE")]
    pub mode: Vec<ScoringMode>,

    /// How to combine samples that share a country
    #[arg(long, value_enum)]
    pub duplicates: Option<DuplicatePolicy>,

    /// Report samples that were only handled on a best-effort basis
    #[arg(long)]
    pub strict: bool,

    /// Score recorded model answers when a sample has no mpe_scorer entry
    #[arg(long)]
    pub rescore: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colors in terminal output
    #[arg(long)]
    pub plain: bool,
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

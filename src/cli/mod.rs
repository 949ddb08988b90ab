//! CLI module for geoscore
//!
//! - Argument parsing (`args`)
//! - Merging flags over the config file (`config_builder`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod config_builder;
pub mod setup;

pub use args::{AggregationArgs, Cli, Commands, DisplayArgs, OutputFormat};
pub use config_builder::{AggregationSettings, DisplayConfig, SyntheticSettings};
pub use setup::init_logging;

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}

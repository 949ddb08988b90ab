use anyhow::Result;
use geoscore::cli::{
    self, AggregationSettings, Commands, DisplayConfig, SyntheticSettings,
};
use geoscore::commands::{self, AggregateConfig, DemoConfig, SimulateConfig};
use geoscore::config::{self, GeoscoreConfig};
use std::path::Path;
use tracing::debug;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "Resolved configuration");

    match cli.command {
        Commands::Aggregate {
            log,
            aggregation,
            display,
        } => commands::handle_aggregate(AggregateConfig {
            log,
            aggregation: AggregationSettings::resolve(&aggregation, &config),
            display: DisplayConfig::resolve(&display, &config),
        }),
        Commands::Simulate {
            seed,
            countries,
            emit_log,
            aggregation,
            display,
        } => commands::handle_simulate(SimulateConfig {
            synthetic: SyntheticSettings::resolve(seed, countries, &config),
            emit_log,
            aggregation: AggregationSettings::resolve(&aggregation, &config),
            display: DisplayConfig::resolve(&display, &config),
        }),
        Commands::Demo {
            log,
            scenario,
            seed,
            emit_log,
            aggregation,
            display,
        } => commands::handle_demo(DemoConfig {
            log,
            scenario,
            seed: seed.or(config.synthetic.seed),
            emit_log,
            aggregation: AggregationSettings::resolve(&aggregation, &config),
            display: DisplayConfig::resolve(&display, &config),
        }),
        Commands::Prompt { topic } => {
            commands::print_prompt(topic.as_deref());
            Ok(())
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

/// An explicit `--config` must load; a discovered one falls back to
/// defaults with a warning.
fn load_config(path: Option<&Path>) -> Result<GeoscoreConfig> {
    match path {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

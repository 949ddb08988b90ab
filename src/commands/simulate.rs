use super::{build_reports, emit_log, write_reports};
use crate::cli::{AggregationSettings, DisplayConfig, SyntheticSettings};
use crate::core::Log;
use crate::synthetic::{SyntheticLogGenerator, DEFAULT_COUNTRIES};
use anyhow::Result;
use tracing::info;

pub struct SimulateConfig {
    pub synthetic: SyntheticSettings,
    pub emit_log: bool,
    pub aggregation: AggregationSettings,
    pub display: DisplayConfig,
}

/// Generate the simulated log described by `settings`.
pub fn simulate_log(settings: &SyntheticSettings) -> Log {
    let mut generator = match settings.seed {
        Some(seed) => SyntheticLogGenerator::seeded(seed),
        None => SyntheticLogGenerator::from_entropy(),
    };
    match &settings.countries {
        Some(countries) => generator.generate(countries),
        None => generator.generate(&DEFAULT_COUNTRIES),
    }
}

pub fn handle_simulate(config: SimulateConfig) -> Result<()> {
    let log = simulate_log(&config.synthetic);
    info!(
        samples = log.len(),
        seed = ?config.synthetic.seed,
        "Generated simulated log"
    );

    if config.emit_log {
        return emit_log(&log, &config.display);
    }
    let reports = build_reports(log, &config.aggregation);
    write_reports(&reports, &config.display)
}

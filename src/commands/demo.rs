use super::{build_reports, emit_log, read_log_arg, write_reports};
use crate::cli::{AggregationSettings, DisplayConfig};
use crate::synthetic::{DemoScenario, SyntheticLogGenerator};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

pub struct DemoConfig {
    pub log: PathBuf,
    pub scenario: DemoScenario,
    pub seed: Option<u64>,
    pub emit_log: bool,
    pub aggregation: AggregationSettings,
    pub display: DisplayConfig,
}

pub fn handle_demo(config: DemoConfig) -> Result<()> {
    let base = read_log_arg(&config.log)?;
    let mut generator = match config.seed {
        Some(seed) => SyntheticLogGenerator::seeded(seed),
        None => SyntheticLogGenerator::from_entropy(),
    };
    let log = config.scenario.apply(&base, &mut generator);
    info!(scenario = ?config.scenario, samples = log.len(), "Built demo scenario");

    if config.emit_log {
        return emit_log(&log, &config.display);
    }
    let reports = build_reports(log, &config.aggregation);
    write_reports(&reports, &config.display)
}

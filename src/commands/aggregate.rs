use super::{build_reports, read_log_arg, write_reports};
use crate::cli::{AggregationSettings, DisplayConfig};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info_span;

pub struct AggregateConfig {
    pub log: PathBuf,
    pub aggregation: AggregationSettings,
    pub display: DisplayConfig,
}

pub fn handle_aggregate(config: AggregateConfig) -> Result<()> {
    let _span = info_span!("aggregate", log = %config.log.display()).entered();

    let log = read_log_arg(&config.log)?;
    let reports = build_reports(log, &config.aggregation);
    write_reports(&reports, &config.display)
}

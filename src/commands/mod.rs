//! CLI command implementations.
//!
//! - **aggregate**: turn a log file into context and risk statistics
//! - **simulate**: generate a random log and aggregate or emit it
//! - **demo**: derive a GDP or population scenario from an existing log
//! - **prompt**: print the data-generation prompt for a topic
//! - **init**: write a default `.geoscore.toml`

pub mod aggregate;
pub mod demo;
pub mod init;
pub mod prompt;
pub mod simulate;

pub use aggregate::{handle_aggregate, AggregateConfig};
pub use demo::{handle_demo, DemoConfig};
pub use init::init_config;
pub use prompt::print_prompt;
pub use simulate::{handle_simulate, SimulateConfig};

use crate::aggregation::Aggregation;
use crate::cli::{AggregationSettings, DisplayConfig};
use crate::core::Log;
use crate::io::{self, AggregationReport};
use crate::ingest;
use crate::session::Session;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Read a log from a file, or from stdin when the path is `-`.
pub fn read_log_arg(path: &Path) -> Result<Log> {
    let log = if path == Path::new("-") {
        ingest::read_log(std::io::stdin().lock())
    } else {
        ingest::read_log_file(path)
    };
    log.with_context(|| format!("Failed to load log from {}", path.display()))
}

/// Aggregate `log` once per requested mode.
///
/// The log is loaded into a session once; each further mode re-aggregates
/// the stored log without re-validating it.
pub fn build_reports(log: Log, settings: &AggregationSettings) -> Vec<AggregationReport> {
    let mut session = Session::new(settings.options);
    session.load(log);

    let mut reports = Vec::with_capacity(settings.modes.len());
    for &mode in &settings.modes {
        session.set_mode(mode);
        let Some(log) = session.log() else {
            break;
        };
        let aggregation = Aggregation {
            statistics: session.current().clone(),
            warnings: session.warnings().to_vec(),
        };
        reports.push(AggregationReport::new(log, mode, aggregation));
    }
    reports
}

/// Write reports in the configured format.
pub fn write_reports(reports: &[AggregationReport], display: &DisplayConfig) -> Result<()> {
    let out = io::open_output(display.output.as_deref())?;
    let mut writer = io::create_writer(display.format, out, display.formatting);
    writer.write_reports(reports)?;
    if let Some(path) = &display.output {
        info!(path = %path.display(), "Wrote report");
    }
    Ok(())
}

/// Write a log itself as pretty JSON, in the format `aggregate` reads back.
pub fn emit_log(log: &Log, display: &DisplayConfig) -> Result<()> {
    let mut out = io::open_output(display.output.as_deref())?;
    serde_json::to_writer_pretty(&mut out, log)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

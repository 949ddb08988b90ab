//! Display presets for the two statistic channels.
//!
//! Presets are presentation configuration, kept as a static table keyed by
//! [`ScoringMode`] so a new mode only needs a new row.
//!
//! - **Risk** channel: one preset per mode, always `%` on a `[0, 0.5]` domain.
//! - **Context** channel: a single preset whose name and unit come from the
//!   log metadata, on a `[0, 30]` domain.
//! - **Placeholders**: what a renderer shows before any log is ingested.

use super::statistic::{ColorScale, CountryValues, StatisticOutput, ValueFormat};
use crate::core::Log;
use crate::scoring::ScoringMode;

/// Fixed description of one risk display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskPreset {
    pub mode: ScoringMode,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: ColorScale,
}

pub const RISK_UNIT: &str = "%";
pub const RISK_DOMAIN: (f64, f64) = (0.0, 0.5);

pub const CONTEXT_ID: &str = "context_index";
pub const CONTEXT_DESCRIPTION: &str = "Reference Data";
pub const CONTEXT_DOMAIN: (f64, f64) = (0.0, 30.0);
pub const CONTEXT_COLORS: ColorScale = ColorScale::new("#1c1917", "#5eead4", "#2dd4bf");
pub const DEFAULT_TOPIC: &str = "Data Analysis";
pub const DEFAULT_UNIT: &str = "Value";

const ERROR_COLORS: ColorScale = ColorScale::new("#86efac", "#fbbf24", "#f43f5e");

pub const RISK_PRESETS: [RiskPreset; 3] = [
    RiskPreset {
        mode: ScoringMode::Mpe,
        id: "mpe_error",
        name: "Statistical Error",
        description: "Mean Percentage Error (MPE)",
        colors: ERROR_COLORS,
    },
    RiskPreset {
        mode: ScoringMode::Grader,
        id: "grader_risk",
        name: "AI Grade (Inverted)",
        description: "100% - Quality Score from the model grader",
        colors: ColorScale::new("#86efac", "#60a5fa", "#a855f7"),
    },
    RiskPreset {
        mode: ScoringMode::Consensus,
        id: "consensus_risk",
        name: "Model Disagreement",
        description: "Low consensus = high uncertainty",
        colors: ColorScale::new("#86efac", "#22d3ee", "#f97316"),
    },
];

impl RiskPreset {
    pub fn for_mode(mode: ScoringMode) -> &'static RiskPreset {
        match mode {
            ScoringMode::Mpe => &RISK_PRESETS[0],
            ScoringMode::Grader => &RISK_PRESETS[1],
            ScoringMode::Consensus => &RISK_PRESETS[2],
        }
    }

    pub fn statistic(&self, values: CountryValues) -> StatisticOutput {
        build(
            self.id,
            self.name,
            RISK_UNIT,
            self.description,
            self.colors,
            RISK_DOMAIN,
            ValueFormat::Percent,
            values,
        )
    }
}

/// Context statistic labelled from the log's metadata.
pub fn context_statistic(log: &Log, values: CountryValues) -> StatisticOutput {
    build(
        CONTEXT_ID,
        log.topic().unwrap_or(DEFAULT_TOPIC),
        log.metric().unwrap_or(DEFAULT_UNIT),
        CONTEXT_DESCRIPTION,
        CONTEXT_COLORS,
        CONTEXT_DOMAIN,
        ValueFormat::DollarTrillions,
        values,
    )
}

/// Context channel shown before any data is loaded.
pub fn placeholder_context() -> StatisticOutput {
    build(
        "init_context",
        "GDP (USD Billions)",
        "USD B",
        "Actual GDP values",
        CONTEXT_COLORS,
        (0.0, 5000.0),
        ValueFormat::DollarBillions,
        CountryValues::new(),
    )
}

/// Risk channel shown before any data is loaded.
pub fn placeholder_risk() -> StatisticOutput {
    build(
        "init_risk",
        "AI Error Rate",
        RISK_UNIT,
        "How wrong the AI was",
        ERROR_COLORS,
        (0.0, 1.0),
        ValueFormat::Percent,
        CountryValues::new(),
    )
}

#[allow(clippy::too_many_arguments)]
fn build(
    id: &str,
    name: &str,
    unit: &str,
    description: &str,
    colors: ColorScale,
    domain: (f64, f64),
    format: ValueFormat,
    values: CountryValues,
) -> StatisticOutput {
    StatisticOutput {
        id: id.to_string(),
        name: name.to_string(),
        unit: unit.to_string(),
        description: description.to_string(),
        color_scale_low: colors.low.to_string(),
        color_scale_mid: colors.mid.to_string(),
        color_scale_high: colors.high.to_string(),
        domain_min: domain.0,
        domain_max: domain.1,
        format,
        values,
    }
}

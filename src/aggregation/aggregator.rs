//! Statistic aggregation over a whole log.
//!
//! One pass resolves every sample's risk value and rescales its reference
//! value, keyed by country, then labels both channels from the preset table.
//! Aggregation of an already-validated [`Log`] cannot fail; the only failure
//! is a malformed raw document, which is rejected before any output exists.

use super::presets::{context_statistic, RiskPreset};
use super::statistic::{CountryValues, StatisticPair};
use crate::core::{Log, Result};
use crate::ingest;
use crate::scoring::{self, reference_normalizer, ScoringMode};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info_span, warn};

/// What to do when several samples share a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The latest sample for a country replaces earlier ones
    #[default]
    LastWins,
    /// The earliest sample for a country is kept
    FirstWins,
    /// Values for a country are averaged
    Average,
}

/// Settings for one aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregationOptions {
    pub mode: ScoringMode,
    pub duplicates: DuplicatePolicy,
    /// Collect per-sample warnings. Never changes computed values.
    pub strict: bool,
    /// Score the model answer into `mpe_scorer` when a sample lacks one.
    pub rescore: bool,
}

impl AggregationOptions {
    pub fn new(mode: ScoringMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_rescore(mut self, rescore: bool) -> Self {
        self.rescore = rescore;
        self
    }
}

/// A sample that was accepted but could only be handled on a best-effort basis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SampleWarning {
    MissingCountry { index: usize },
    NoScoreSignal { index: usize, country: String, mode: ScoringMode },
    NonNumericReference { index: usize, country: String },
    DuplicateCountry { index: usize, country: String },
}

impl fmt::Display for SampleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCountry { index } => {
                write!(f, "sample {index}: missing or empty metadata.country, keyed as empty string")
            }
            Self::NoScoreSignal {
                index,
                country,
                mode,
            } => write!(
                f,
                "sample {index} ({country}): no numeric score for mode '{mode}', using 0"
            ),
            Self::NonNumericReference { index, country } => write!(
                f,
                "sample {index} ({country}): actual_value is not a number, using sentinel"
            ),
            Self::DuplicateCountry { index, country } => {
                write!(f, "sample {index}: repeats country '{country}'")
            }
        }
    }
}

/// Output of one aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub statistics: StatisticPair,
    /// Empty unless the pass ran in strict mode.
    pub warnings: Vec<SampleWarning>,
}

/// Aggregate a validated log with default options for `mode`
/// (last write wins, no warnings).
pub fn aggregate(log: &Log, mode: ScoringMode) -> StatisticPair {
    aggregate_with(log, &AggregationOptions::new(mode)).statistics
}

/// Validate a raw JSON document, then aggregate it.
///
/// Validation happens before anything is computed, so a rejected document
/// produces no output at all.
pub fn aggregate_value(raw: &Value, options: &AggregationOptions) -> Result<Aggregation> {
    let log = ingest::validate(raw)?;
    Ok(aggregate_with(&log, options))
}

/// Aggregate a validated log.
pub fn aggregate_with(log: &Log, options: &AggregationOptions) -> Aggregation {
    let _span = info_span!("aggregate", mode = %options.mode, samples = log.len()).entered();

    let mut risk = Accumulator::new(options.duplicates);
    let mut context = Accumulator::new(options.duplicates);
    let mut warnings = Vec::new();

    for (index, sample) in log.samples.iter().enumerate() {
        let country = sample.country();
        let scores = if options.rescore {
            scoring::with_mpe_score(sample)
        } else {
            Cow::Borrowed(&sample.scores)
        };
        let resolution = scoring::resolve_scores(&scores, options.mode);
        let reference = reference_normalizer::normalize(&sample.metadata.actual_value);

        let repeated = risk.record(country, resolution.value);
        context.record(country, reference);

        if options.strict {
            if country.is_empty() {
                warnings.push(SampleWarning::MissingCountry { index });
            }
            if !resolution.is_resolved() {
                warnings.push(SampleWarning::NoScoreSignal {
                    index,
                    country: country.to_string(),
                    mode: options.mode,
                });
            }
            if sample.metadata.actual_value.as_number().is_none() {
                warnings.push(SampleWarning::NonNumericReference {
                    index,
                    country: country.to_string(),
                });
            }
            if repeated {
                warnings.push(SampleWarning::DuplicateCountry {
                    index,
                    country: country.to_string(),
                });
            }
        }
    }

    for warning in &warnings {
        warn!("{warning}");
    }

    let risk_values = risk.finish();
    debug!(countries = risk_values.len(), warnings = warnings.len(), "Aggregation complete");

    Aggregation {
        statistics: StatisticPair {
            context: context_statistic(log, context.finish()),
            risk: RiskPreset::for_mode(options.mode).statistic(risk_values),
        },
        warnings,
    }
}

struct Accumulator {
    policy: DuplicatePolicy,
    entries: BTreeMap<String, (f64, u32)>,
}

impl Accumulator {
    fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            entries: BTreeMap::new(),
        }
    }

    /// Record a value; returns whether the country was already present.
    fn record(&mut self, country: &str, value: f64) -> bool {
        if let Some(entry) = self.entries.get_mut(country) {
            match self.policy {
                DuplicatePolicy::LastWins => *entry = (value, 1),
                DuplicatePolicy::FirstWins => {}
                DuplicatePolicy::Average => {
                    entry.0 += value;
                    entry.1 += 1;
                }
            }
            return true;
        }
        self.entries.insert(country.to_string(), (value, 1));
        false
    }

    fn finish(self) -> CountryValues {
        self.entries
            .into_iter()
            .map(|(country, (sum, count))| (country, sum / f64::from(count)))
            .collect()
    }
}

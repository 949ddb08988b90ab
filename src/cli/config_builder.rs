//! Configuration builders for CLI commands
//!
//! Command-line flags are merged over `.geoscore.toml` here, so command
//! handlers only ever see fully-resolved settings.

use crate::aggregation::AggregationOptions;
use crate::cli::args::{AggregationArgs, DisplayArgs, OutputFormat};
use crate::config::GeoscoreConfig;
use crate::formatting::FormattingConfig;
use crate::scoring::ScoringMode;
use std::path::PathBuf;

/// How to aggregate a log: the modes to render and the shared options.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationSettings {
    /// Non-empty, duplicates removed, in the order requested.
    pub modes: Vec<ScoringMode>,
    pub options: AggregationOptions,
}

impl AggregationSettings {
    pub fn resolve(args: &AggregationArgs, config: &GeoscoreConfig) -> Self {
        let base = config.aggregation.options();

        let mut modes = Vec::new();
        for mode in &args.mode {
            if !modes.contains(mode) {
                modes.push(*mode);
            }
        }
        if modes.is_empty() {
            modes.push(base.mode);
        }

        let options = AggregationOptions::new(modes[0])
            .with_duplicates(args.duplicates.unwrap_or(base.duplicates))
            .with_strict(args.strict || base.strict)
            .with_rescore(args.rescore || base.rescore);

        Self { modes, options }
    }
}

/// Where and how to write reports.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

impl DisplayConfig {
    pub fn resolve(args: &DisplayArgs, config: &GeoscoreConfig) -> Self {
        Self {
            format: args
                .format
                .or(config.output.default_format)
                .unwrap_or_default(),
            output: args.output.clone(),
            formatting: FormattingConfig::resolve(args.plain, config.output.use_color),
        }
    }
}

/// Seed and country list for synthetic logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticSettings {
    pub seed: Option<u64>,
    pub countries: Option<Vec<String>>,
}

impl SyntheticSettings {
    pub fn resolve(
        seed: Option<u64>,
        countries: Option<Vec<String>>,
        config: &GeoscoreConfig,
    ) -> Self {
        let countries = countries
            .map(|list| {
                list.into_iter()
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect::<Vec<_>>()
            })
            .or_else(|| config.synthetic.countries.clone());
        Self {
            seed: seed.or(config.synthetic.seed),
            countries,
        }
    }
}

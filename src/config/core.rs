use serde::{Deserialize, Serialize};

use crate::aggregation::{AggregationOptions, DuplicatePolicy};
use crate::cli::OutputFormat;
use crate::scoring::ScoringMode;

/// Root configuration structure for geoscore
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoscoreConfig {
    /// Aggregation defaults
    #[serde(default)]
    pub aggregation: AggregationConfig,

    /// Synthetic log generation
    #[serde(default)]
    pub synthetic: SyntheticConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    #[serde(default)]
    pub mode: ScoringMode,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// Report per-sample warnings
    #[serde(default)]
    pub strict: bool,
    /// Fill a missing `mpe_scorer` from the sample's answer
    #[serde(default)]
    pub rescore: bool,
}

impl AggregationConfig {
    pub fn options(&self) -> AggregationOptions {
        AggregationOptions::new(self.mode)
            .with_duplicates(self.duplicate_policy)
            .with_strict(self.strict)
            .with_rescore(self.rescore)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Fixed seed for reproducible simulations
    #[serde(default)]
    pub seed: Option<u64>,
    /// Replaces the built-in country list
    #[serde(default)]
    pub countries: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

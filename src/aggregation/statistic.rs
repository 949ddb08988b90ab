use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-country values keyed by country name.
pub type CountryValues = BTreeMap<String, f64>;

/// Three-stop color scale, as CSS hex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    pub low: &'static str,
    pub mid: &'static str,
    pub high: &'static str,
}

impl ColorScale {
    pub const fn new(low: &'static str, mid: &'static str, high: &'static str) -> Self {
        Self { low, mid, high }
    }
}

/// How a renderer should label a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueFormat {
    /// `0.8` → `80%`
    Percent,
    /// `2.5` → `$2.5T`
    DollarTrillions,
    /// `420` → `$420B`
    DollarBillions,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Percent => format!("{:.0}%", value * 100.0),
            Self::DollarTrillions => format!("${value:.1}T"),
            Self::DollarBillions => format!("${value}B"),
        }
    }
}

/// One display channel handed to the renderer: metadata plus values.
///
/// A fresh record is built on every aggregation; it is never patched in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticOutput {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub description: String,
    pub color_scale_low: String,
    pub color_scale_mid: String,
    pub color_scale_high: String,
    pub domain_min: f64,
    pub domain_max: f64,
    pub format: ValueFormat,
    pub values: CountryValues,
}

impl StatisticOutput {
    pub fn color_scale(&self) -> [&str; 3] {
        [
            self.color_scale_low.as_str(),
            self.color_scale_mid.as_str(),
            self.color_scale_high.as_str(),
        ]
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Format a value with this statistic's display hint.
    pub fn display(&self, value: f64) -> String {
        self.format.format(value)
    }

    /// Position of `value` within the display domain, clamped to `[0, 1]`.
    pub fn domain_fraction(&self, value: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.domain_min) / span).clamp(0.0, 1.0)
    }
}

/// The two statistics produced by one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticPair {
    /// Reference values (left channel)
    pub context: StatisticOutput,
    /// Error/risk values (right channel)
    pub risk: StatisticOutput,
}

//! Statistic aggregation: from a log and a scoring mode to the two display
//! channels handed to a renderer.

mod aggregator;
pub mod presets;
mod statistic;

pub use aggregator::{
    aggregate, aggregate_value, aggregate_with, Aggregation, AggregationOptions, DuplicatePolicy,
    SampleWarning,
};
pub use presets::RiskPreset;
pub use statistic::{ColorScale, CountryValues, StatisticOutput, StatisticPair, ValueFormat};

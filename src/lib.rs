//! Evaluation logs to per-country choropleth statistics.
//!
//! A log of model-evaluation samples, each tagged with a country, a reference
//! value and one or more quality scores, is validated and folded into two
//! statistics: a *context* channel of normalized reference values and a
//! *risk* channel of model error under the selected [`ScoringMode`].

// Export modules for library usage
pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod ingest;
pub mod io;
pub mod research;
pub mod scoring;
pub mod session;
pub mod synthetic;

// Re-export commonly used types
pub use crate::core::{
    Error, Log, LogMeta, ReferenceValue, Result, Sample, SampleMetadata, Score, ScoreMap,
};

pub use crate::aggregation::{
    aggregate, aggregate_value, aggregate_with, Aggregation, AggregationOptions, DuplicatePolicy,
    SampleWarning, StatisticOutput, StatisticPair, ValueFormat,
};

pub use crate::ingest::{parse_log_text, read_log, read_log_file, validate};

pub use crate::io::output::{create_writer, AggregationReport, OutputWriter};

pub use crate::scoring::{mpe_score, normalize, resolve, ScoringMode};

pub use crate::session::Session;

pub use crate::synthetic::{DemoScenario, SyntheticLogGenerator};

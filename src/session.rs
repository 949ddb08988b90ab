//! Session state for interactive use.
//!
//! A [`Session`] holds what a viewer keeps between user actions: the active
//! scoring mode, the most recently ingested log, and the statistics currently
//! on display. Every state change produces a complete new statistic pair;
//! a rejected ingestion leaves all three untouched.

use crate::aggregation::{
    aggregate_with, presets, AggregationOptions, DuplicatePolicy, SampleWarning, StatisticPair,
};
use crate::core::{Log, Result};
use crate::ingest;
use crate::scoring::ScoringMode;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Session {
    options: AggregationOptions,
    log: Option<Log>,
    current: StatisticPair,
    warnings: Vec<SampleWarning>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AggregationOptions::default())
    }
}

impl Session {
    /// Start a session showing the placeholder statistics.
    pub fn new(options: AggregationOptions) -> Self {
        Self {
            options,
            log: None,
            current: StatisticPair {
                context: presets::placeholder_context(),
                risk: presets::placeholder_risk(),
            },
            warnings: Vec::new(),
        }
    }

    pub fn mode(&self) -> ScoringMode {
        self.options.mode
    }

    pub fn options(&self) -> &AggregationOptions {
        &self.options
    }

    /// Statistics currently on display.
    pub fn current(&self) -> &StatisticPair {
        &self.current
    }

    /// Warnings from the last aggregation (strict mode only).
    pub fn warnings(&self) -> &[SampleWarning] {
        &self.warnings
    }

    /// Most recently ingested log.
    pub fn log(&self) -> Option<&Log> {
        self.log.as_ref()
    }

    /// Replace the stored log and display its statistics.
    pub fn load(&mut self, log: Log) -> &StatisticPair {
        info!(samples = log.len(), "Loaded log");
        self.log = Some(log);
        self.refresh();
        &self.current
    }

    /// Parse pasted or dropped text and display it.
    pub fn ingest_text(&mut self, text: &str) -> Result<&StatisticPair> {
        let log = ingest::parse_log_text(text)?;
        Ok(self.load(log))
    }

    /// Validate a parsed JSON document and display it.
    pub fn ingest_value(&mut self, raw: Value) -> Result<&StatisticPair> {
        let log = ingest::validate(&ingest::normalize_legacy_shape(raw))?;
        Ok(self.load(log))
    }

    /// Switch scoring mode, re-aggregating the stored log without
    /// re-reading or re-validating it.
    pub fn set_mode(&mut self, mode: ScoringMode) -> &StatisticPair {
        self.options.mode = mode;
        self.refresh();
        &self.current
    }

    pub fn set_duplicate_policy(&mut self, policy: DuplicatePolicy) -> &StatisticPair {
        self.options.duplicates = policy;
        self.refresh();
        &self.current
    }

    fn refresh(&mut self) {
        if let Some(log) = &self.log {
            let aggregation = aggregate_with(log, &self.options);
            self.current = aggregation.statistics;
            self.warnings = aggregation.warnings;
        }
    }
}

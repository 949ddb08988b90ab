//! Score resolution: one scalar error/risk value per sample.
//!
//! Each [`ScoringMode`] reads a preferred signal from the sample's score map
//! and falls back through a fixed chain when it is absent. Resolution is
//! total: a sample with no usable signal resolves to `0.0`, so every country
//! stays renderable.
//!
//! | Mode        | Preferred signal             | Fallback chain            |
//! |-------------|------------------------------|---------------------------|
//! | `mpe`       | first entry, verbatim        | `0`                       |
//! | `grader`    | `1 - model_grader`           | `mpe_scorer` as-is, `0`   |
//! | `consensus` | `1 - consensus`              | `mpe_scorer` as-is, `0`   |
//!
//! The inversion applies only to the preferred grader/consensus signal,
//! never to the `mpe_scorer` fallback.

use super::ScoringMode;
use crate::core::{Sample, ScoreMap};
use serde::Serialize;

/// Score key written by the model-graded quality scorer.
pub const MODEL_GRADER: &str = "model_grader";
/// Score key written by the mean-percentage-error scorer.
pub const MPE_SCORER: &str = "mpe_scorer";
/// Score key holding cross-model agreement in `[0, 1]`.
pub const CONSENSUS: &str = "consensus";

/// Which signal produced a resolved score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSignal {
    /// First score entry in insertion order
    FirstEntry,
    /// Inverted `model_grader`
    InvertedGrader,
    /// Inverted `consensus`
    InvertedConsensus,
    /// `mpe_scorer`, uninverted
    MpeFallback,
    /// Nothing usable; the value is zero
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution {
    pub value: f64,
    pub signal: ScoreSignal,
}

impl Resolution {
    fn new(value: f64, signal: ScoreSignal) -> Self {
        Self { value, signal }
    }

    fn missing() -> Self {
        Self::new(0.0, ScoreSignal::Default)
    }

    /// Whether the value came from an actual score rather than the default.
    pub fn is_resolved(&self) -> bool {
        self.signal != ScoreSignal::Default
    }
}

/// Resolve a sample's error/risk value under `mode`.
pub fn resolve(sample: &Sample, mode: ScoringMode) -> f64 {
    resolve_scores(&sample.scores, mode).value
}

/// Resolve a score map under `mode`, reporting which signal was used.
pub fn resolve_scores(scores: &ScoreMap, mode: ScoringMode) -> Resolution {
    match mode {
        ScoringMode::Mpe => scores
            .first_value()
            .map(|v| Resolution::new(v, ScoreSignal::FirstEntry))
            .unwrap_or_else(Resolution::missing),
        ScoringMode::Grader => inverted_or_mpe(scores, MODEL_GRADER, ScoreSignal::InvertedGrader),
        ScoringMode::Consensus => {
            inverted_or_mpe(scores, CONSENSUS, ScoreSignal::InvertedConsensus)
        }
    }
}

fn inverted_or_mpe(scores: &ScoreMap, preferred: &str, signal: ScoreSignal) -> Resolution {
    if let Some(quality) = scores.value_of(preferred) {
        return Resolution::new(1.0 - quality, signal);
    }
    scores
        .value_of(MPE_SCORER)
        .map(|v| Resolution::new(v, ScoreSignal::MpeFallback))
        .unwrap_or_else(Resolution::missing)
}

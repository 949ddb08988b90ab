//! Demo scenarios derived from an existing log.

use super::generator::{SyntheticLogGenerator, SIMULATED_SCORE_KEY};
use crate::core::{Log, LogMeta, Sample, Score, ScoreMap};
use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

const POPULATION_CEILING: f64 = 1_000_000.0;
const POPULATION_SKEW: f64 = 1.5;
const POPULATION_JITTER: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DemoScenario {
    /// Relabel the log as a GDP study
    Gdp,
    /// Re-skew errors upward and fabricate population figures
    Population,
}

impl DemoScenario {
    pub fn meta(&self) -> LogMeta {
        let (topic, description, metric) = match self {
            Self::Gdp => ("Global GDP", "Standard Economic Data", "USD (Billions)"),
            Self::Population => ("Global Population", "Synthetic Bias Test", "People"),
        };
        LogMeta {
            topic: Some(topic.to_string()),
            description: Some(description.to_string()),
            metric: Some(metric.to_string()),
        }
    }

    /// Build the scenario's log from `base`. Only the population scenario
    /// draws from the generator.
    pub fn apply<R: Rng>(&self, base: &Log, generator: &mut SyntheticLogGenerator<R>) -> Log {
        let samples = match self {
            Self::Gdp => base.samples.clone(),
            Self::Population => base
                .samples
                .iter()
                .map(|sample| generator.population_sample(sample))
                .collect(),
        };
        Log::new(samples).with_meta(self.meta())
    }
}

impl<R: Rng> SyntheticLogGenerator<R> {
    /// Population variant of a sample: errors skewed 1.5x with ±0.1 jitter
    /// (clamped to `[0, 1]`) and a fabricated head count as the reference.
    fn population_sample(&mut self, sample: &Sample) -> Sample {
        let base = sample
            .scores
            .value_of(SIMULATED_SCORE_KEY)
            .or_else(|| sample.scores.value_of("sim"))
            .unwrap_or(0.0);
        let jitter = self.unit() * 2.0 * POPULATION_JITTER - POPULATION_JITTER;
        let value = (base * POPULATION_SKEW + jitter).clamp(0.0, 1.0);
        let population = (self.unit() * POPULATION_CEILING).floor();

        let mut scores = ScoreMap::new();
        scores.insert(SIMULATED_SCORE_KEY, Score::new(value));

        let mut derived = sample.clone();
        derived.scores = scores;
        derived.metadata.actual_value = population.into();
        derived
    }
}

//! Synthetic evaluation logs for demos and tests.
//!
//! Each country independently lands in one of three error bands:
//!
//! | Draw `r`          | Band          | Value range    | Expected share |
//! |-------------------|---------------|----------------|----------------|
//! | `r <= 0.7`        | accurate      | `[0, 0.05)`    | 70%            |
//! | `0.7 < r <= 0.9`  | moderate      | `[0.1, 0.3)`   | 20%            |
//! | `r > 0.9`         | hallucination | `[0.5, 1.5)`   | 10%            |
//!
//! The random source is a type parameter so tests can inject a seeded RNG.

use crate::core::{Log, Sample, SampleMetadata, Score, ScoreMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::ops::Range;

/// Score key used for every synthetic sample.
pub const SIMULATED_SCORE_KEY: &str = "metric";

const SIMULATED_YEAR: i64 = 2022;
const SIMULATED_METRIC: &str = "sim_metric";
const REFERENCE_CEILING: f64 = 1000.0;

/// Countries used when the caller does not supply a list.
pub const DEFAULT_COUNTRIES: [&str; 34] = [
    "United States",
    "China",
    "India",
    "Germany",
    "Japan",
    "United Kingdom",
    "France",
    "Brazil",
    "Italy",
    "Canada",
    "Russia",
    "South Korea",
    "Australia",
    "Spain",
    "Mexico",
    "Indonesia",
    "Turkey",
    "Netherlands",
    "Saudi Arabia",
    "Switzerland",
    "Argentina",
    "Sweden",
    "Poland",
    "Belgium",
    "Thailand",
    "Iran",
    "Austria",
    "Norway",
    "United Arab Emirates",
    "Nigeria",
    "South Africa",
    "Egypt",
    "Vietnam",
    "Pakistan",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorBand {
    Accurate,
    Moderate,
    Hallucination,
}

impl ErrorBand {
    /// Band selected by a uniform draw in `[0, 1)`.
    pub fn from_draw(r: f64) -> Self {
        if r > 0.9 {
            Self::Hallucination
        } else if r > 0.7 {
            Self::Moderate
        } else {
            Self::Accurate
        }
    }

    /// Half-open range of values this band produces.
    pub fn range(&self) -> Range<f64> {
        match self {
            Self::Accurate => 0.0..0.05,
            Self::Moderate => 0.1..0.3,
            Self::Hallucination => 0.5..1.5,
        }
    }

    /// Band whose range contains `value`, if any.
    pub fn classify(value: f64) -> Option<Self> {
        [Self::Accurate, Self::Moderate, Self::Hallucination]
            .into_iter()
            .find(|band| band.range().contains(&value))
    }

    /// Map a uniform draw in `[0, 1)` onto this band's range.
    fn value_from(&self, u: f64) -> f64 {
        match self {
            Self::Accurate => 0.05 * u,
            Self::Moderate => 0.1 + 0.2 * u,
            Self::Hallucination => 0.5 + u,
        }
    }
}

pub struct SyntheticLogGenerator<R: Rng = StdRng> {
    rng: R,
}

impl SyntheticLogGenerator<StdRng> {
    /// Generator seeded from the operating system; not reproducible.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SyntheticLogGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Fabricate one sample per country.
    pub fn generate<S: AsRef<str>>(&mut self, countries: &[S]) -> Log {
        let samples = countries
            .iter()
            .map(|country| self.sample_for(country.as_ref()))
            .collect();
        Log::new(samples)
    }

    fn sample_for(&mut self, country: &str) -> Sample {
        let band = ErrorBand::from_draw(self.unit());
        let error_rate = band.value_from(self.unit());
        let reference = (self.unit() * REFERENCE_CEILING).floor();

        let mut scores = ScoreMap::new();
        scores.insert(
            SIMULATED_SCORE_KEY,
            Score::new(error_rate).with_explanation("Simulated"),
        );

        Sample {
            input: format!("Simulated Input for {country}"),
            target: "0".to_string(),
            output: None,
            scores,
            metadata: SampleMetadata {
                country: Some(country.to_string()),
                year: Some(SIMULATED_YEAR),
                metric: Some(SIMULATED_METRIC.to_string()),
                actual_value: reference.into(),
                ..SampleMetadata::default()
            },
        }
    }

    /// Uniform draw in `[0, 1)`.
    pub(crate) fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

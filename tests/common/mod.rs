#![allow(dead_code)]

use geoscore::{Log, Sample, Score, ScoreMap};
use serde_json::{json, Value};

/// A sample with a country, a numeric reference and the given scores.
pub fn sample(country: &str, actual: f64, scores: &[(&str, f64)]) -> Sample {
    let mut sample = Sample::default();
    sample.metadata.country = Some(country.to_string());
    sample.metadata.actual_value = actual.into();
    sample.scores = scores
        .iter()
        .map(|&(name, value)| (name, Score::new(value)))
        .collect::<ScoreMap>();
    sample
}

pub fn log(samples: Vec<Sample>) -> Log {
    Log::new(samples)
}

/// The two-country log used across integration tests, as raw JSON.
pub fn france_japan() -> Value {
    json!({
        "samples": [
            {
                "input": "GDP of France?",
                "target": "3000000000000",
                "scores": {"model_grader": {"value": 0.2}},
                "metadata": {"country": "France", "actual_value": 3000000000000u64}
            },
            {
                "input": "GDP of Japan?",
                "target": "n/a",
                "scores": {},
                "metadata": {"country": "Japan", "actual_value": "n/a"}
            }
        ]
    })
}

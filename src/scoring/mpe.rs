//! Percentage-error scoring of a free-text numeric answer.
//!
//! Logs written before the numeric scorer existed carry the model's answer
//! but no `mpe_scorer` entry. [`with_mpe_score`] fills that entry in so the
//! resolver's fallback chain has something to read.

use super::resolver::MPE_SCORER;
use crate::core::{Sample, Score, ScoreMap};
use std::borrow::Cow;

/// Value given to an answer that does not parse as a number.
pub const UNPARSEABLE_ERROR: f64 = 1.0;

const STRIPPED_TOKENS: [&str; 4] = ["$", "usd", ",", " "];

/// Score `answer` against the numeric `target` by relative error
/// `|prediction - actual| / actual`. A zero target scores `0`.
pub fn mpe_score(answer: &str, target: &str) -> Score {
    let parsed = parse_answer(answer).zip(parse_number(target.trim()));
    let Some((prediction, actual)) = parsed else {
        return Score::new(UNPARSEABLE_ERROR)
            .with_answer(answer)
            .with_explanation(format!("Could not parse number from output: '{answer}'"));
    };

    let error = if actual != 0.0 {
        (prediction - actual).abs() / actual
    } else {
        0.0
    };

    Score::new(error)
        .with_answer(format!("{prediction:?}"))
        .with_explanation(format!(
            "Predicted: {}, Actual: {}, Error: {:.2}%",
            grouped(prediction),
            grouped(actual),
            error * 100.0
        ))
}

/// The sample's scores, with `mpe_scorer` computed from its answer when the
/// log left it out. Borrows when nothing needs adding.
pub fn with_mpe_score(sample: &Sample) -> Cow<'_, ScoreMap> {
    match sample.answer() {
        Some(answer) if !sample.scores.contains(MPE_SCORER) => {
            let mut scores = sample.scores.clone();
            scores.insert(MPE_SCORER, mpe_score(answer, &sample.target));
            Cow::Owned(scores)
        }
        _ => Cow::Borrowed(&sample.scores),
    }
}

fn parse_answer(raw: &str) -> Option<f64> {
    let mut clean = raw.trim().to_lowercase();
    for token in STRIPPED_TOKENS {
        clean = clean.replace(token, "");
    }
    parse_number(&clean)
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole-number rendering with thousands separators, e.g. `2,500,000`.
fn grouped(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 && digits != "0" {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

mod common;

use common::{france_japan, log, sample};
use geoscore::aggregation::presets;
use geoscore::{
    aggregate, aggregate_value, aggregate_with, parse_log_text, AggregationOptions,
    DuplicatePolicy, SampleWarning, ScoringMode, ValueFormat,
};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn france_and_japan_end_to_end() {
    let aggregation =
        aggregate_value(&france_japan(), &AggregationOptions::new(ScoringMode::Grader)).unwrap();
    let pair = aggregation.statistics;

    assert_eq!(pair.context.id, "context_index");
    assert_eq!(pair.context.name, "Data Analysis");
    assert_eq!(pair.context.unit, "Value");
    assert_eq!(pair.context.format, ValueFormat::DollarTrillions);
    assert_eq!(
        pair.context.values,
        BTreeMap::from([("France".to_string(), 3.0), ("Japan".to_string(), 1.0)])
    );

    assert_eq!(pair.risk.id, "grader_risk");
    assert_eq!(pair.risk.name, "AI Grade (Inverted)");
    assert_eq!(pair.risk.domain(), (0.0, 0.5));
    assert_eq!(
        pair.risk.values,
        BTreeMap::from([("France".to_string(), 0.8), ("Japan".to_string(), 0.0)])
    );
    assert!(aggregation.warnings.is_empty());
}

#[test]
fn every_mode_produces_its_preset() {
    let log = log(vec![sample(
        "Peru",
        2.5e11,
        &[("model_grader", 0.9), ("consensus", 0.7), ("mpe_scorer", 0.05)],
    )]);

    for mode in ScoringMode::ALL {
        let pair = aggregate(&log, mode);
        let preset = presets::RiskPreset::for_mode(mode);
        assert_eq!(pair.risk.id, preset.id);
        assert_eq!(pair.risk.color_scale_high, preset.colors.high);
        assert_eq!(pair.context.values["Peru"], 250.0);
    }

    assert_eq!(aggregate(&log, ScoringMode::Mpe).risk.values["Peru"], 0.9);
    assert!((aggregate(&log, ScoringMode::Grader).risk.values["Peru"] - 0.1).abs() < 1e-12);
    assert!((aggregate(&log, ScoringMode::Consensus).risk.values["Peru"] - 0.3).abs() < 1e-12);
}

#[test]
fn log_metadata_labels_context_channel() {
    let log = parse_log_text(indoc! {r#"
        ```json
        {
          "meta": {"topic": "Pet Ownership", "description": "share of households", "metric": "%"},
          "samples": [
            {"scores": {"metric": {"value": 0.2}}, "metadata": {"country": "Spain", "actual_value": 41}}
          ]
        }
        ```
    "#})
    .unwrap();

    let pair = aggregate(&log, ScoringMode::Mpe);
    assert_eq!(pair.context.name, "Pet Ownership");
    assert_eq!(pair.context.unit, "%");
    assert_eq!(pair.context.values["Spain"], 41.0);
    assert_eq!(pair.risk.values["Spain"], 0.2);
}

#[test]
fn overflowing_numbers_fall_back_instead_of_rejecting_the_log() {
    let log = parse_log_text(indoc! {r#"
        {"samples": [
          {"scores": {"model_grader": {"value": 1e400}, "mpe_scorer": {"value": 0.4}},
           "metadata": {"country": "France", "actual_value": 1e400}},
          {"scores": {"model_grader": {"value": 0.75}},
           "metadata": {"country": "Japan", "actual_value": 4200000000000}}
        ]}
    "#})
    .unwrap();

    let pair = aggregate(&log, ScoringMode::Grader);
    assert_eq!(pair.risk.values["France"], 0.4);
    assert_eq!(pair.risk.values["Japan"], 0.25);
    assert_eq!(pair.context.values["France"], 1.0);
    assert_eq!(pair.context.values["Japan"], 4.2);
}

#[test]
fn rescore_scores_recorded_answers() {
    let log = parse_log_text(indoc! {r#"
        {"samples": [
          {"target": "2500000000000",
           "output": {"completion": "$3,000,000,000,000"},
           "metadata": {"country": "France", "actual_value": 2500000000000}}
        ]}
    "#})
    .unwrap();

    let plain = aggregate_with(&log, &AggregationOptions::new(ScoringMode::Mpe));
    assert_eq!(plain.statistics.risk.values["France"], 0.0);

    let options = AggregationOptions::new(ScoringMode::Mpe).with_rescore(true);
    let rescored = aggregate_with(&log, &options);
    assert!((rescored.statistics.risk.values["France"] - 0.2).abs() < 1e-12);
}

#[test]
fn rejects_logs_without_samples() {
    for text in ["{}", "{\"samples\": 3}", "\"samples\"", "null"] {
        let err = parse_log_text(text).unwrap_err();
        assert!(err.is_format(), "{text} should be a format error");
    }
}

#[test]
fn empty_log_yields_empty_channels() {
    let pair = aggregate(&log(vec![]), ScoringMode::Consensus);
    assert!(pair.context.values.is_empty());
    assert!(pair.risk.values.is_empty());
    assert_eq!(pair.risk.id, "consensus_risk");
}

#[test]
fn duplicate_countries_follow_policy() {
    let log = log(vec![
        sample("Chile", 1.5e12, &[("mpe_scorer", 0.2)]),
        sample("Chile", 2.5e12, &[("mpe_scorer", 0.6)]),
    ]);

    let last = aggregate_with(&log, &AggregationOptions::new(ScoringMode::Mpe));
    assert_eq!(last.statistics.risk.values["Chile"], 0.6);
    assert_eq!(last.statistics.context.values["Chile"], 2.5);

    let first = aggregate_with(
        &log,
        &AggregationOptions::new(ScoringMode::Mpe).with_duplicates(DuplicatePolicy::FirstWins),
    );
    assert_eq!(first.statistics.risk.values["Chile"], 0.2);

    let average = aggregate_with(
        &log,
        &AggregationOptions::new(ScoringMode::Mpe).with_duplicates(DuplicatePolicy::Average),
    );
    assert!((average.statistics.risk.values["Chile"] - 0.4).abs() < 1e-12);
    assert!((average.statistics.context.values["Chile"] - 2.0).abs() < 1e-12);
}

#[test]
fn strict_mode_reports_without_changing_values() {
    let mut raw = france_japan();
    raw["samples"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({
            "scores": {"model_grader": {"value": 0.5}},
            "metadata": {"country": "", "actual_value": 5}
        }));
    let lenient = aggregate_value(&raw, &AggregationOptions::new(ScoringMode::Grader)).unwrap();
    let strict = aggregate_value(
        &raw,
        &AggregationOptions::new(ScoringMode::Grader).with_strict(true),
    )
    .unwrap();

    assert_eq!(lenient.statistics, strict.statistics);
    assert!(lenient.warnings.is_empty());
    assert!(strict
        .warnings
        .iter()
        .any(|w| matches!(w, SampleWarning::NonNumericReference { country, .. } if country == "Japan")));
    assert!(strict
        .warnings
        .contains(&SampleWarning::MissingCountry { index: 2 }));
}

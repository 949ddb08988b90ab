use geoscore::synthetic::{ErrorBand, SyntheticLogGenerator, DEFAULT_COUNTRIES};
use geoscore::{aggregate, DemoScenario, ScoringMode};
use std::collections::BTreeMap;

fn band_shares(seed: u64, n: usize) -> BTreeMap<ErrorBand, f64> {
    let countries: Vec<String> = (0..n).map(|i| format!("Country {i}")).collect();
    let log = SyntheticLogGenerator::seeded(seed).generate(&countries);
    let pair = aggregate(&log, ScoringMode::Mpe);
    assert_eq!(pair.risk.values.len(), n);

    let mut counts = BTreeMap::new();
    for &value in pair.risk.values.values() {
        let band = ErrorBand::classify(value)
            .unwrap_or_else(|| panic!("{value} falls outside every band"));
        *counts.entry(band).or_insert(0usize) += 1;
    }
    counts
        .into_iter()
        .map(|(band, count)| (band, count as f64 / n as f64))
        .collect()
}

#[test]
fn simulated_errors_split_seventy_twenty_ten() {
    for seed in [1, 2024] {
        let shares = band_shares(seed, 10_000);
        let share = |band| shares.get(&band).copied().unwrap_or_default();
        assert!((share(ErrorBand::Accurate) - 0.7).abs() < 0.03, "{shares:?}");
        assert!((share(ErrorBand::Moderate) - 0.2).abs() < 0.03, "{shares:?}");
        assert!((share(ErrorBand::Hallucination) - 0.1).abs() < 0.03, "{shares:?}");
    }
}

#[test]
fn simulated_values_stay_in_range() {
    let log = SyntheticLogGenerator::seeded(5).generate(&DEFAULT_COUNTRIES);
    let pair = aggregate(&log, ScoringMode::Mpe);

    assert_eq!(pair.context.values.len(), DEFAULT_COUNTRIES.len());
    for (country, &risk) in &pair.risk.values {
        assert!((0.0..1.5).contains(&risk), "{country}: {risk}");
        let reference = pair.context.values[country];
        assert!((0.0..1000.0).contains(&reference), "{country}: {reference}");
        assert_eq!(reference.fract(), 0.0);
    }
}

#[test]
fn simulated_log_has_no_grader_signal() {
    let log = SyntheticLogGenerator::seeded(8).generate(&["Togo"]);
    let mpe = aggregate(&log, ScoringMode::Mpe).risk.values["Togo"];
    assert_eq!(aggregate(&log, ScoringMode::Grader).risk.values["Togo"], 0.0);
    assert!(mpe >= 0.0);
}

#[test]
fn population_demo_keeps_scores_in_unit_range() {
    let mut generator = SyntheticLogGenerator::seeded(13);
    let base = generator.generate(&DEFAULT_COUNTRIES);
    let demo = DemoScenario::Population.apply(&base, &mut generator);

    assert_eq!(demo.len(), base.len());
    assert_eq!(demo.topic(), Some("Global Population"));
    let pair = aggregate(&demo, ScoringMode::Mpe);
    assert!(pair.risk.values.values().all(|v| (0.0..=1.0).contains(v)));
    assert_eq!(pair.context.name, "Global Population");
    assert_eq!(pair.context.unit, "People");
}

#[test]
fn gdp_demo_only_relabels() {
    let mut generator = SyntheticLogGenerator::seeded(21);
    let base = generator.generate(&DEFAULT_COUNTRIES);
    let demo = DemoScenario::Gdp.apply(&base, &mut generator);

    assert_eq!(demo.samples, base.samples);
    assert_eq!(aggregate(&demo, ScoringMode::Mpe).context.name, "Global GDP");
}

//! Fabricated logs: random simulations and demo scenarios.

mod demo;
mod generator;

pub use demo::DemoScenario;
pub use generator::{ErrorBand, SyntheticLogGenerator, DEFAULT_COUNTRIES, SIMULATED_SCORE_KEY};

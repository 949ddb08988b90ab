//! Score resolution and reference rescaling.

mod mode;
pub mod mpe;
pub mod reference_normalizer;
pub mod resolver;

pub use mode::ScoringMode;
pub use mpe::{mpe_score, with_mpe_score};
pub use reference_normalizer::normalize;
pub use resolver::{resolve, resolve_scores, Resolution, ScoreSignal};

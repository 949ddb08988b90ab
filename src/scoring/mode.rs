use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Algorithm used to derive a sample's error/risk value from its scores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// First score entry, taken verbatim (mean percentage error)
    #[default]
    Mpe,
    /// Inverted model-grader quality score
    Grader,
    /// Inverted cross-model consensus
    Consensus,
}

impl ScoringMode {
    pub const ALL: [ScoringMode; 3] = [Self::Mpe, Self::Grader, Self::Consensus];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mpe => "mpe",
            Self::Grader => "grader",
            Self::Consensus => "consensus",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mpe" => Ok(Self::Mpe),
            "grader" => Ok(Self::Grader),
            "consensus" => Ok(Self::Consensus),
            other => Err(format!(
                "unknown scoring mode '{other}' (expected mpe, grader or consensus)"
            )),
        }
    }
}

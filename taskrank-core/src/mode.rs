//! Scoring modes: how the four factor sub-scores are blended.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    FastestWins,
    HighImpact,
    DeadlineDriven,
    /// Adaptive: blends with the live, feedback-tuned weights.
    #[default]
    SmartBalance,
}

impl ScoringMode {
    pub const ALL: [ScoringMode; 4] = [
        ScoringMode::FastestWins,
        ScoringMode::HighImpact,
        ScoringMode::DeadlineDriven,
        ScoringMode::SmartBalance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FastestWins => "fastest_wins",
            Self::HighImpact => "high_impact",
            Self::DeadlineDriven => "deadline_driven",
            Self::SmartBalance => "smart_balance",
        }
    }

    /// Parse a mode name. Unknown names fall back to `smart_balance`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim() {
            "fastest_wins" => Self::FastestWins,
            "high_impact" => Self::HighImpact,
            "deadline_driven" => Self::DeadlineDriven,
            "smart_balance" => Self::SmartBalance,
            other => {
                tracing::warn!(mode = other, "unknown scoring mode, using smart_balance");
                Self::SmartBalance
            }
        }
    }

    pub fn is_adaptive(&self) -> bool {
        matches!(self, Self::SmartBalance)
    }
}

impl From<&str> for ScoringMode {
    fn from(s: &str) -> Self {
        Self::parse_lenient(s)
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

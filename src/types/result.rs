use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = f64;

/// Banded categorization of a fit score. Bands are inclusive at their lower
/// bound and checked in descending order, so the highest satisfied band wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitLabel {
    Excellent,
    Good,
    Moderate,
    Weak,
}

impl FitLabel {
    pub fn from_score(score: Score) -> Self {
        if score >= 0.8 {
            Self::Excellent
        } else if score >= 0.65 {
            Self::Good
        } else if score >= 0.5 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

impl fmt::Display for FitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One profile's scoring outcome: echoed profile attributes (floats rounded
/// to three decimals), echoed need values exactly as given, and the computed
/// score plus its label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitResult {
    pub profile: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub privacy_focus: Score,
    pub soundness_focus: Score,
    pub performance_focus: Score,
    pub complexity: Score,
    pub privacy_need: i64,
    pub formal_need: i64,
    pub throughput_need: i64,
    pub latency_tolerance: i64,
    pub crypto_experience: i64,
    pub fit_score: Score,
    pub fit_label: FitLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub profile: String,
    pub name: String,
    pub fit_score: Score,
    pub fit_label: FitLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub best_profile: String,
    pub best_name: String,
    pub best_fit_score: Score,
    pub best_fit_label: FitLabel,
    pub ranking: Vec<RankingEntry>,
}

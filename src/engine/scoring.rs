//! Scoring rules and the per-row fantasy point calculation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::{StatCategory, StatRow};
use crate::error::BetError;

/// Named scoring presets.
///
/// The three presets differ only in reception credit; yardage, touchdown and
/// turnover weights are shared.
///
/// # Examples
///
/// ```rust
/// use ffl_bets::ScoringRule;
///
/// let rule: ScoringRule = "half".parse().unwrap();
/// assert_eq!(rule, ScoringRule::Half);
/// assert_eq!(rule.to_string(), "HALF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScoringRule {
    /// One point per reception
    #[default]
    #[serde(rename = "PPR")]
    Ppr,
    /// Half a point per reception
    #[serde(rename = "HALF")]
    Half,
    /// No reception credit
    #[serde(rename = "STD")]
    Standard,
}

impl ScoringRule {
    pub const ALL: [ScoringRule; 3] = [ScoringRule::Ppr, ScoringRule::Half, ScoringRule::Standard];

    pub fn name(&self) -> &'static str {
        match self {
            ScoringRule::Ppr => "PPR",
            ScoringRule::Half => "HALF",
            ScoringRule::Standard => "STD",
        }
    }

    pub fn weights(&self) -> ScoringWeights {
        let base = ScoringWeights::standard();
        match self {
            ScoringRule::Ppr => ScoringWeights {
                reception: 1.0,
                ..base
            },
            ScoringRule::Half => ScoringWeights {
                reception: 0.5,
                ..base
            },
            ScoringRule::Standard => base,
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScoringRule {
    type Err = BetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PPR" | "FULL" => Ok(ScoringRule::Ppr),
            "HALF" | "HALF-PPR" | "HALF_PPR" => Ok(ScoringRule::Half),
            "STD" | "STANDARD" => Ok(ScoringRule::Standard),
            _ => Err(BetError::InvalidScoring {
                name: s.to_string(),
            }),
        }
    }
}

/// Points per unit of each stat category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    pub reception: f64,
    pub passing_yard: f64,
    pub passing_td: f64,
    pub interception: f64,
    pub rushing_yard: f64,
    pub rushing_td: f64,
    pub receiving_yard: f64,
    pub receiving_td: f64,
    pub fumble_lost: f64,
}

impl ScoringWeights {
    /// Standard (non-PPR) weights.
    pub fn standard() -> Self {
        Self {
            reception: 0.0,
            passing_yard: 0.04, // 1 point per 25 yards
            passing_td: 4.0,
            interception: -2.0,
            rushing_yard: 0.1, // 1 point per 10 yards
            rushing_td: 6.0,
            receiving_yard: 0.1,
            receiving_td: 6.0,
            fumble_lost: -2.0,
        }
    }

    pub fn weight(&self, category: StatCategory) -> f64 {
        match category {
            StatCategory::Receptions => self.reception,
            StatCategory::PassingYards => self.passing_yard,
            StatCategory::PassingTds => self.passing_td,
            StatCategory::Interceptions => self.interception,
            StatCategory::RushingYards => self.rushing_yard,
            StatCategory::RushingTds => self.rushing_td,
            StatCategory::ReceivingYards => self.receiving_yard,
            StatCategory::ReceivingTds => self.receiving_td,
            StatCategory::FumblesLost => self.fumble_lost,
        }
    }
}

/// Round to 2 decimal places, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fantasy points for one stat row under `rule`, rounded to 2 decimals.
pub fn score(row: &StatRow, rule: ScoringRule) -> f64 {
    let weights = rule.weights();
    let total: f64 = StatCategory::ALL
        .iter()
        .map(|&category| row.stat(category) * weights.weight(category))
        .sum();
    round2(total)
}

//! Row types for the three weekly datasets

use crate::cli::types::{CanonicalId, SecondaryId, Season, TeamCode, Week};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Statistical categories that contribute to a fantasy score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    Receptions,
    PassingYards,
    PassingTds,
    Interceptions,
    RushingYards,
    RushingTds,
    ReceivingYards,
    ReceivingTds,
    FumblesLost,
}

impl StatCategory {
    pub const ALL: [StatCategory; 9] = [
        StatCategory::Receptions,
        StatCategory::PassingYards,
        StatCategory::PassingTds,
        StatCategory::Interceptions,
        StatCategory::RushingYards,
        StatCategory::RushingTds,
        StatCategory::ReceivingYards,
        StatCategory::ReceivingTds,
        StatCategory::FumblesLost,
    ];

    /// Column name in the weekly stats file.
    pub fn column(&self) -> &'static str {
        match self {
            StatCategory::Receptions => "receptions",
            StatCategory::PassingYards => "passing_yards",
            StatCategory::PassingTds => "passing_tds",
            StatCategory::Interceptions => "interceptions",
            StatCategory::RushingYards => "rushing_yards",
            StatCategory::RushingTds => "rushing_tds",
            StatCategory::ReceivingYards => "receiving_yards",
            StatCategory::ReceivingTds => "receiving_tds",
            StatCategory::FumblesLost => "fumbles_lost",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonType {
    Regular,
    Other,
}

impl SeasonType {
    /// nflverse marks regular-season rows with `REG`; everything else
    /// (`POST`, preseason) is folded into `Other`.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("REG") {
            SeasonType::Regular
        } else {
            SeasonType::Other
        }
    }
}

/// One player's single-week statistical line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    pub season: Season,
    pub week: Week,
    pub season_type: SeasonType,
    pub team: TeamCode,
    pub player_id: CanonicalId,
    pub player_name: String,
    pub stats: BTreeMap<StatCategory, f64>,
}

impl StatRow {
    /// Value for one category; categories that were never recorded count as 0.
    pub fn stat(&self, category: StatCategory) -> f64 {
        self.stats.get(&category).copied().unwrap_or(0.0)
    }

    /// Builder-style setter, mostly useful for fixtures.
    pub fn with_stat(mut self, category: StatCategory, value: f64) -> Self {
        self.stats.insert(category, value);
        self
    }
}

/// Cross-source identity: canonical id → snap-source id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub canonical_id: CanonicalId,
    pub secondary_id: Option<SecondaryId>,
    pub display_name: String,
}

/// One player-week of offensive participation, as a percentage in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapRecord {
    pub season: Season,
    pub week: Week,
    pub team: TeamCode,
    pub secondary_id: Option<SecondaryId>,
    pub player_name: String,
    pub offense_pct: f64,
}

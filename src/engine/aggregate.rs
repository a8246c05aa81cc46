//! Qualification filter and points-per-game aggregation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::scoring::{round2, score, ScoringRule};
use super::snaps::JoinedRow;
use crate::error::{BetError, Result};

/// Minimum offensive snap percentage for a game to count, in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SnapThreshold(f64);

impl SnapThreshold {
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&value) {
            return Err(BetError::InvalidSnapThreshold { value });
        }
        Ok(Self(value))
    }

    /// Threshold that admits every game.
    pub fn none() -> Self {
        Self(0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Inclusive: a game exactly at the threshold qualifies.
    pub fn admits(&self, snap_pct: f64) -> bool {
        snap_pct >= self.0
    }
}

impl Default for SnapThreshold {
    fn default() -> Self {
        Self(25.0)
    }
}

impl fmt::Display for SnapThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnapThreshold {
    type Err = BetError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .trim_end_matches('%')
            .parse()
            .map_err(|_| BetError::UnparsableSnapThreshold {
                input: s.trim().to_string(),
            })?;
        Self::new(value)
    }
}

/// Points per qualifying game and how many games qualified.
///
/// `points_per_game` is 0.0 whenever `qualifying_games` is 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub points_per_game: f64,
    pub qualifying_games: u32,
}

impl AggregateResult {
    pub const EMPTY: AggregateResult = AggregateResult {
        points_per_game: 0.0,
        qualifying_games: 0,
    };
}

impl Default for AggregateResult {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Filter `rows` by `min_snap` and average the fantasy score of the rest.
///
/// Each row is scored (and rounded) first, the mean is rounded again. Row
/// order does not matter.
pub fn aggregate(rows: &[JoinedRow<'_>], min_snap: SnapThreshold, rule: ScoringRule) -> AggregateResult {
    let mut scores: Vec<f64> = rows
        .iter()
        .filter(|row| min_snap.admits(row.snap_pct))
        .map(|row| score(row.stat, rule))
        .collect();

    if scores.is_empty() {
        return AggregateResult::EMPTY;
    }

    // Sum in a fixed order so permuted input gives bit-identical output.
    scores.sort_by(f64::total_cmp);
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    AggregateResult {
        points_per_game: round2(mean),
        qualifying_games: scores.len() as u32,
    }
}

//! Data models for the storage layer

use crate::cli::types::{BetId, Season, WeekRange};
use crate::engine::{ScoringRule, SnapThreshold};
use serde::{Deserialize, Serialize};

/// A stored head-to-head bet: player A vs player B over a week range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub id: BetId,
    pub creator: String,
    pub player_a: String,
    pub player_b: String,
    pub description: String,
    pub scoring: ScoringRule,
    pub min_snap: SnapThreshold,
    pub season: Season,
    pub weeks: WeekRange,
    pub participants: Vec<String>,
    pub is_active: bool,
    pub created_at: u64,
}

/// Fields supplied when creating a bet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBet {
    pub creator: String,
    pub player_a: String,
    pub player_b: String,
    pub description: String,
    pub scoring: ScoringRule,
    pub min_snap: SnapThreshold,
    pub season: Season,
    pub weeks: WeekRange,
    pub participants: Vec<String>,
}

/// Partial update; `None` leaves a column unchanged.
///
/// `participants: Some(vec![])` clears the participant list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BetUpdate {
    pub player_a: Option<String>,
    pub player_b: Option<String>,
    pub description: Option<String>,
    pub scoring: Option<ScoringRule>,
    pub min_snap: Option<SnapThreshold>,
    pub weeks: Option<WeekRange>,
    pub participants: Option<Vec<String>>,
}

impl BetUpdate {
    pub fn is_empty(&self) -> bool {
        self.player_a.is_none()
            && self.player_b.is_none()
            && self.description.is_none()
            && self.scoring.is_none()
            && self.min_snap.is_none()
            && self.weeks.is_none()
            && self.participants.is_none()
    }
}

/// Drop blank and repeated participant ids, keeping first-seen order.
pub fn dedupe_participants<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for id in ids {
        let id = id.as_ref().trim();
        if !id.is_empty() && !out.iter().any(|seen| seen == id) {
            out.push(id.to_string());
        }
    }
    out
}

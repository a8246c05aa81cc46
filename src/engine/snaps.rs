//! Snap join: attach an offensive snap percentage to every resolved row.
//!
//! Join keys are tried in priority order (`JOIN_ORDER`): the snap-source id
//! first, then the display name. A row that matches neither gets 0.0, which
//! the aggregator treats as "did not qualify".

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use super::resolve::ResolvedRow;
use crate::cli::types::{Season, TeamCode, Week};
use crate::data::{SnapRecord, StatRow};

/// Snap percentage assigned when no snap record joins.
pub const MISSING_SNAP_PCT: f64 = 0.0;

/// One way of keying a row into the snap table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStrategy {
    /// (season, week, team, secondary id)
    SecondaryId,
    /// (season, week, team, display name)
    DisplayName,
}

/// Strategies in the order they are tried.
pub const JOIN_ORDER: [JoinStrategy; 2] = [JoinStrategy::SecondaryId, JoinStrategy::DisplayName];

/// Where a row's snap percentage came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapSource {
    Joined(JoinStrategy),
    /// No snap record matched; the row carries `MISSING_SNAP_PCT`.
    Defaulted,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SnapKey {
    season: Season,
    week: Week,
    team: TeamCode,
    player: String,
}

impl SnapKey {
    fn new(season: Season, week: Week, team: &TeamCode, player: &str) -> Self {
        Self {
            season,
            week,
            team: team.clone(),
            player: player.trim().to_string(),
        }
    }
}

/// Snap percentages keyed both ways.
///
/// When the source has several rows for one key the first row is kept and the
/// rest are counted in `duplicates`.
#[derive(Debug, Default)]
pub struct SnapIndex {
    by_secondary: HashMap<SnapKey, f64>,
    by_name: HashMap<SnapKey, f64>,
    duplicates: usize,
}

impl SnapIndex {
    pub fn build(records: &[SnapRecord]) -> Self {
        let mut index = Self::default();

        for record in records {
            if let Some(id) = &record.secondary_id {
                let key = SnapKey::new(record.season, record.week, &record.team, id.as_str());
                index.insert(JoinStrategy::SecondaryId, key, record.offense_pct);
            }
            if !record.player_name.is_empty() {
                let key = SnapKey::new(
                    record.season,
                    record.week,
                    &record.team,
                    &record.player_name,
                );
                index.insert(JoinStrategy::DisplayName, key, record.offense_pct);
            }
        }

        if index.duplicates > 0 {
            warn!(
                duplicates = index.duplicates,
                "snap counts repeat join keys; the first row for each key is used"
            );
        }
        index
    }

    fn insert(&mut self, strategy: JoinStrategy, key: SnapKey, pct: f64) {
        let map = match strategy {
            JoinStrategy::SecondaryId => &mut self.by_secondary,
            JoinStrategy::DisplayName => &mut self.by_name,
        };
        match map.entry(key) {
            Entry::Occupied(_) => self.duplicates += 1,
            Entry::Vacant(slot) => {
                slot.insert(pct);
            }
        }
    }

    /// Number of rows that repeated an already-indexed key.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Look a row up with one strategy. `None` is a miss, including rows that
    /// have no value for the strategy's key.
    pub fn lookup(&self, strategy: JoinStrategy, row: &ResolvedRow<'_>) -> Option<f64> {
        let stat = row.stat;
        match strategy {
            JoinStrategy::SecondaryId => {
                let id = row.secondary_id?;
                self.by_secondary
                    .get(&SnapKey::new(stat.season, stat.week, &stat.team, id.as_str()))
                    .copied()
            }
            JoinStrategy::DisplayName => self
                .by_name
                .get(&SnapKey::new(
                    stat.season,
                    stat.week,
                    &stat.team,
                    &stat.player_name,
                ))
                .copied(),
        }
    }
}

/// Try `strategies` in order and return the first hit.
pub fn first_match(
    index: &SnapIndex,
    row: &ResolvedRow<'_>,
    strategies: &[JoinStrategy],
) -> Option<(JoinStrategy, f64)> {
    strategies
        .iter()
        .find_map(|&strategy| index.lookup(strategy, row).map(|pct| (strategy, pct)))
}

/// A stat row with exactly one snap percentage assigned.
#[derive(Debug, Clone, Copy)]
pub struct JoinedRow<'a> {
    pub stat: &'a StatRow,
    pub snap_pct: f64,
    pub source: SnapSource,
}

/// Attach a snap percentage to every row, preserving order and length.
pub fn attach_snap_pct<'a>(index: &SnapIndex, rows: &[ResolvedRow<'a>]) -> Vec<JoinedRow<'a>> {
    rows.iter()
        .map(|row| match first_match(index, row, &JOIN_ORDER) {
            Some((strategy, snap_pct)) => JoinedRow {
                stat: row.stat,
                snap_pct,
                source: SnapSource::Joined(strategy),
            },
            None => JoinedRow {
                stat: row.stat,
                snap_pct: MISSING_SNAP_PCT,
                source: SnapSource::Defaulted,
            },
        })
        .collect()
}

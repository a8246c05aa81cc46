//! Validated, indexed snapshot of the three input tables

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use super::models::{IdentityRecord, SeasonType, SnapRecord, StatCategory, StatRow};
use super::{SNAPS_TABLE, STATS_TABLE};
use crate::cli::types::{CanonicalId, Season, Week};
use crate::engine::snaps::SnapIndex;
use crate::error::{BetError, Result};

/// Immutable set of loaded tables that the engine queries.
///
/// Construction validates every row, so the engine itself never has to fail.
/// Share one snapshot (behind an `Arc`) between queries that must be compared
/// against each other.
#[derive(Debug)]
pub struct DatasetTables {
    stats: Vec<StatRow>,
    identities: HashMap<CanonicalId, IdentityRecord>,
    snaps: SnapIndex,
    snap_rows: usize,
}

impl DatasetTables {
    /// Validate the raw tables and build the lookup indexes.
    ///
    /// The first identity record per canonical id wins.
    pub fn new(
        stats: Vec<StatRow>,
        snaps: Vec<SnapRecord>,
        identities: Vec<IdentityRecord>,
    ) -> Result<Self> {
        for (idx, row) in stats.iter().enumerate() {
            validate_stat_row(idx + 1, row)?;
        }
        for (idx, row) in snaps.iter().enumerate() {
            validate_snap_row(idx + 1, row)?;
        }

        let mut identity_index = HashMap::with_capacity(identities.len());
        for record in identities {
            if let Entry::Vacant(slot) = identity_index.entry(record.canonical_id.clone()) {
                slot.insert(record);
            }
        }

        let snap_index = SnapIndex::build(&snaps);
        debug!(
            stats = stats.len(),
            snaps = snaps.len(),
            identities = identity_index.len(),
            "dataset tables ready"
        );

        Ok(Self {
            stats,
            identities: identity_index,
            snaps: snap_index,
            snap_rows: snaps.len(),
        })
    }

    pub fn stats(&self) -> &[StatRow] {
        &self.stats
    }

    pub fn identity(&self, id: &CanonicalId) -> Option<&IdentityRecord> {
        self.identities.get(id)
    }

    pub fn snap_index(&self) -> &SnapIndex {
        &self.snaps
    }

    pub fn snap_row_count(&self) -> usize {
        self.snap_rows
    }

    pub fn identity_count(&self) -> usize {
        self.identities.len()
    }

    /// Latest regular-season week with published stats, if any.
    pub fn max_regular_week(&self, season: Season) -> Option<Week> {
        self.stats
            .iter()
            .filter(|r| r.season == season && r.season_type == SeasonType::Regular)
            .map(|r| r.week)
            .max()
    }
}

fn validate_stat_row(row: usize, stat: &StatRow) -> Result<()> {
    let invalid = |reason: String| BetError::InvalidTable {
        table: STATS_TABLE.to_string(),
        row,
        reason,
    };

    if stat.week.as_u16() == 0 {
        return Err(invalid("week must be at least 1".to_string()));
    }
    for category in StatCategory::ALL {
        let value = stat.stat(category);
        if !value.is_finite() {
            return Err(invalid(format!("`{}` is not a finite number", category)));
        }
    }
    Ok(())
}

fn validate_snap_row(row: usize, snap: &SnapRecord) -> Result<()> {
    let invalid = |reason: String| BetError::InvalidTable {
        table: SNAPS_TABLE.to_string(),
        row,
        reason,
    };

    if snap.week.as_u16() == 0 {
        return Err(invalid("week must be at least 1".to_string()));
    }
    if !(0.0..=100.0).contains(&snap.offense_pct) {
        return Err(invalid(format!(
            "offense_pct {} outside 0-100",
            snap.offense_pct
        )));
    }
    Ok(())
}

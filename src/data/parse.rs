//! CSV readers for the nflverse weekly stats, snap counts and player map.
//!
//! Columns the engine does not use are ignored. Numeric stat cells that are
//! empty or `NA` read as missing and count as 0.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use tracing::{debug, info};

use super::models::{IdentityRecord, SeasonType, SnapRecord, StatCategory, StatRow};
use super::{IDENTITY_TABLE, SNAPS_TABLE, STATS_TABLE};
use crate::cli::types::{CanonicalId, SecondaryId, Season, TeamCode, Week};
use crate::error::{BetError, Result};

#[derive(Debug, Deserialize)]
struct RawStatRow {
    #[serde(default)]
    player_id: Option<String>,
    #[serde(default)]
    player_display_name: Option<String>,
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    recent_team: Option<String>,
    season: u16,
    week: u16,
    #[serde(default)]
    season_type: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    receptions: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    passing_yards: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    passing_tds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    interceptions: Option<f64>,
    /// Newer stat files renamed `interceptions`.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    passing_interceptions: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rushing_yards: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rushing_tds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    receiving_yards: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    receiving_tds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    fumbles_lost: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawSnapRow {
    season: u16,
    week: u16,
    team: String,
    #[serde(default)]
    player: Option<String>,
    #[serde(default)]
    pfr_player_id: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    offense_pct: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawIdentityRow {
    #[serde(default)]
    gsis_id: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    pfr_id: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != "NA")
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

fn row_error(table: &str, err: csv::Error) -> BetError {
    let row = err
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or_default();
    BetError::InvalidTable {
        table: table.to_string(),
        row,
        reason: err.to_string(),
    }
}

fn missing(table: &str, row: usize, column: &str) -> BetError {
    BetError::InvalidTable {
        table: table.to_string(),
        row,
        reason: format!("missing `{}`", column),
    }
}

/// Read the weekly player stats file.
pub fn read_stats<R: Read>(reader: R) -> Result<Vec<StatRow>> {
    let mut rdr = csv_reader(reader);
    let mut rows = Vec::new();

    for (idx, record) in rdr.deserialize::<RawStatRow>().enumerate() {
        let raw = record.map_err(|e| row_error(STATS_TABLE, e))?;
        let row = idx + 1;

        let player_id =
            non_empty(raw.player_id).ok_or_else(|| missing(STATS_TABLE, row, "player_id"))?;
        let player_name = non_empty(raw.player_display_name)
            .or_else(|| non_empty(raw.player_name))
            .ok_or_else(|| missing(STATS_TABLE, row, "player_display_name"))?;
        let team = non_empty(raw.team)
            .or_else(|| non_empty(raw.recent_team))
            .ok_or_else(|| missing(STATS_TABLE, row, "team"))?;

        let values = [
            (StatCategory::Receptions, raw.receptions),
            (StatCategory::PassingYards, raw.passing_yards),
            (StatCategory::PassingTds, raw.passing_tds),
            (
                StatCategory::Interceptions,
                raw.interceptions.or(raw.passing_interceptions),
            ),
            (StatCategory::RushingYards, raw.rushing_yards),
            (StatCategory::RushingTds, raw.rushing_tds),
            (StatCategory::ReceivingYards, raw.receiving_yards),
            (StatCategory::ReceivingTds, raw.receiving_tds),
            (StatCategory::FumblesLost, raw.fumbles_lost),
        ];
        let stats: BTreeMap<StatCategory, f64> = values
            .into_iter()
            .filter_map(|(category, value)| value.map(|v| (category, v)))
            .collect();

        rows.push(StatRow {
            season: Season::new(raw.season),
            week: Week::new(raw.week),
            season_type: raw
                .season_type
                .as_deref()
                .map(SeasonType::from_code)
                .unwrap_or(SeasonType::Other),
            team: TeamCode::new(&team),
            player_id: CanonicalId::new(player_id),
            player_name,
            stats,
        });
    }

    debug!(rows = rows.len(), "read {}", STATS_TABLE);
    Ok(rows)
}

/// Read the weekly snap-count file.
///
/// Rows without an offensive percentage are dropped: a player-week with no
/// recorded participation behaves the same as one that is absent. When every
/// percentage in the file is at most 1.0 the column holds fractions and is
/// scaled to [0, 100].
pub fn read_snaps<R: Read>(reader: R) -> Result<Vec<SnapRecord>> {
    let mut rdr = csv_reader(reader);
    let mut rows = Vec::new();

    for (idx, record) in rdr.deserialize::<RawSnapRow>().enumerate() {
        let raw = record.map_err(|e| row_error(SNAPS_TABLE, e))?;
        let Some(offense_pct) = raw.offense_pct else {
            continue;
        };
        let player_name = non_empty(raw.player).unwrap_or_default();
        let secondary_id = non_empty(raw.pfr_player_id).map(SecondaryId::new);
        if player_name.is_empty() && secondary_id.is_none() {
            return Err(missing(SNAPS_TABLE, idx + 1, "player"));
        }

        rows.push(SnapRecord {
            season: Season::new(raw.season),
            week: Week::new(raw.week),
            team: TeamCode::new(&raw.team),
            secondary_id,
            player_name,
            offense_pct,
        });
    }

    let fractional = !rows.is_empty() && rows.iter().all(|r| r.offense_pct <= 1.0);
    if fractional {
        info!(
            rows = rows.len(),
            "every {} offense_pct is at most 1.0; reading the column as fractions",
            SNAPS_TABLE
        );
        for r in rows.iter_mut() {
            // Round to hundredths of a percent so 0.29 lands on 29.0, not 28.999...
            r.offense_pct = (r.offense_pct * 10_000.0).round() / 100.0;
        }
    }

    debug!(rows = rows.len(), "read {}", SNAPS_TABLE);
    Ok(rows)
}

/// Read the cross-source player map. Players without a GSIS id cannot be
/// linked to stat rows and are skipped.
pub fn read_identities<R: Read>(reader: R) -> Result<Vec<IdentityRecord>> {
    let mut rdr = csv_reader(reader);
    let mut rows = Vec::new();

    for record in rdr.deserialize::<RawIdentityRow>() {
        let raw = record.map_err(|e| row_error(IDENTITY_TABLE, e))?;
        let Some(gsis_id) = non_empty(raw.gsis_id) else {
            continue;
        };

        rows.push(IdentityRecord {
            canonical_id: CanonicalId::new(gsis_id),
            secondary_id: non_empty(raw.pfr_id).map(SecondaryId::new),
            display_name: non_empty(raw.display_name).unwrap_or_default(),
        });
    }

    debug!(rows = rows.len(), "read {}", IDENTITY_TABLE);
    Ok(rows)
}

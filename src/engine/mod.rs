//! PPG engine: resolve a player by name, join snap percentages, score and
//! aggregate qualifying games.
//!
//! The pipeline is pure. It reads an already-validated `DatasetTables`
//! snapshot and never fails; table problems are reported when the snapshot
//! is built.

pub mod aggregate;
pub mod resolve;
pub mod scoring;
pub mod snaps;


use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::types::{CanonicalId, Season, TeamCode, Week, WeekRange};
use crate::data::DatasetTables;

pub use aggregate::{aggregate, AggregateResult, SnapThreshold};
pub use resolve::{resolve, ResolvedRow};
pub use scoring::{round2, score, ScoringRule, ScoringWeights};
pub use snaps::{attach_snap_pct, first_match, JoinStrategy, JoinedRow, SnapIndex, SnapSource};

/// Everything needed to compute one player's PPG.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PpgQuery {
    pub player: String,
    pub season: Season,
    pub weeks: WeekRange,
    pub min_snap: SnapThreshold,
    pub rule: ScoringRule,
}

/// One joined game, as it went through the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLine {
    pub week: Week,
    pub team: TeamCode,
    pub player_id: CanonicalId,
    pub player_name: String,
    pub snap_pct: f64,
    pub snap_source: SnapSource,
    pub points: f64,
    pub qualified: bool,
}

/// Aggregate plus the identities it was computed over.
///
/// Substring matching can pull in more than one player; `matched_ids` lets
/// callers notice and warn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PpgReport {
    pub player: String,
    pub aggregate: AggregateResult,
    pub matched_ids: BTreeSet<CanonicalId>,
    pub matched_names: BTreeSet<String>,
    pub games: Vec<GameLine>,
}

impl PpgReport {
    pub fn is_ambiguous(&self) -> bool {
        self.matched_ids.len() > 1
    }
}

/// Run resolve → snap join → aggregate for one query.
pub fn compute_ppg(tables: &DatasetTables, query: &PpgQuery) -> PpgReport {
    let resolved = resolve(tables, &query.player, query.season, query.weeks);
    let joined = attach_snap_pct(tables.snap_index(), &resolved);
    let result = aggregate(&joined, query.min_snap, query.rule);

    let matched_ids: BTreeSet<CanonicalId> =
        joined.iter().map(|row| row.stat.player_id.clone()).collect();
    let matched_names: BTreeSet<String> =
        joined.iter().map(|row| row.stat.player_name.clone()).collect();

    if matched_ids.len() > 1 {
        warn!(
            player = %query.player,
            matches = ?matched_names,
            "name matched more than one player; their games are combined"
        );
    }

    let games = joined
        .iter()
        .map(|row| GameLine {
            week: row.stat.week,
            team: row.stat.team.clone(),
            player_id: row.stat.player_id.clone(),
            player_name: row.stat.player_name.clone(),
            snap_pct: row.snap_pct,
            snap_source: row.source,
            points: score(row.stat, query.rule),
            qualified: query.min_snap.admits(row.snap_pct),
        })
        .collect();

    debug!(
        player = %query.player,
        rows = joined.len(),
        qualifying = result.qualifying_games,
        ppg = result.points_per_game,
        "computed ppg"
    );

    PpgReport {
        player: query.player.clone(),
        aggregate: result,
        matched_ids,
        matched_names,
        games,
    }
}

/// Render as `"X.XX PPG over N qualifying game(s)"`.
pub fn format_ppg(result: &AggregateResult) -> String {
    format!(
        "{:.2} PPG over {} qualifying game{}",
        result.points_per_game,
        result.qualifying_games,
        if result.qualifying_games == 1 { "" } else { "s" }
    )
}

//! Identity resolution: name fragment → weekly stat rows with their
//! snap-source identifier attached.

use crate::cli::types::{SecondaryId, Season, WeekRange};
use crate::data::{DatasetTables, SeasonType, StatRow};

/// A matched stat row plus the secondary identifier from the identity map.
///
/// `secondary_id` is `None` when the player has no identity record or the
/// record has no snap-source id; the snap join then falls back to the name.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRow<'a> {
    pub stat: &'a StatRow,
    pub secondary_id: Option<&'a SecondaryId>,
}

/// Find every regular-season row in `weeks` of `season` whose player name
/// contains `fragment`, ignoring case.
///
/// Distinct players sharing the fragment are all returned. The fragment is
/// used as given: an empty one matches every row in the window.
pub fn resolve<'a>(
    tables: &'a DatasetTables,
    fragment: &str,
    season: Season,
    weeks: WeekRange,
) -> Vec<ResolvedRow<'a>> {
    let needle = fragment.to_lowercase();

    tables
        .stats()
        .iter()
        .filter(|row| {
            row.season == season
                && row.season_type == SeasonType::Regular
                && weeks.contains(row.week)
        })
        .filter(|row| row.player_name.to_lowercase().contains(&needle))
        .map(|stat| ResolvedRow {
            stat,
            secondary_id: tables
                .identity(&stat.player_id)
                .and_then(|record| record.secondary_id.as_ref()),
        })
        .collect()
}

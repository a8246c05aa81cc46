//! Unit tests for CSV parsing and table validation

use super::parse::{read_identities, read_snaps, read_stats};
use super::*;
use crate::cli::types::{CanonicalId, SecondaryId, Season, TeamCode, Week};
use crate::error::BetError;

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_read_stats_basic_row() {
        let csv = "player_id,player_display_name,team,season,week,season_type,receptions,receiving_yards,receiving_tds,passing_yards\n\
                   00-0035676,A.J. Brown,PHI,2024,3,REG,5,80,1,\n";

        let rows = read_stats(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.player_id, CanonicalId::new("00-0035676"));
        assert_eq!(row.player_name, "A.J. Brown");
        assert_eq!(row.team, TeamCode::new("PHI"));
        assert_eq!(row.season, Season::new(2024));
        assert_eq!(row.week, Week::new(3));
        assert_eq!(row.season_type, SeasonType::Regular);
        assert_eq!(row.stat(StatCategory::Receptions), 5.0);
        assert_eq!(row.stat(StatCategory::ReceivingYards), 80.0);
        // Empty cell and absent column both read as zero
        assert_eq!(row.stat(StatCategory::PassingYards), 0.0);
        assert_eq!(row.stat(StatCategory::FumblesLost), 0.0);
    }

    #[test]
    fn test_read_stats_alternate_columns() {
        let csv = "player_id,player_name,recent_team,season,week,season_type,passing_interceptions,rushing_yards\n\
                   00-0034857,J.Allen,BUF,2023,19,POST,2,NA\n";

        let rows = read_stats(csv.as_bytes()).unwrap();
        let row = &rows[0];
        assert_eq!(row.player_name, "J.Allen");
        assert_eq!(row.team.as_str(), "BUF");
        assert_eq!(row.season_type, SeasonType::Other);
        assert_eq!(row.stat(StatCategory::Interceptions), 2.0);
        assert_eq!(row.stat(StatCategory::RushingYards), 0.0);
    }

    #[test]
    fn test_read_stats_prefers_display_name() {
        let csv = "player_id,player_name,player_display_name,team,season,week,season_type\n\
                   00-0034857,J.Allen,Josh Allen,BUF,2024,1,REG\n";

        let rows = read_stats(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].player_name, "Josh Allen");
    }

    #[test]
    fn test_read_stats_missing_player_id_is_invalid() {
        let csv = "player_id,player_display_name,team,season,week,season_type\n\
                   00-1,Good Row,KC,2024,1,REG\n\
                   ,No Id,KC,2024,1,REG\n";

        match read_stats(csv.as_bytes()) {
            Err(BetError::InvalidTable { table, row, .. }) => {
                assert_eq!(table, STATS_TABLE);
                assert_eq!(row, 2);
            }
            other => panic!("Expected InvalidTable, got {:?}", other),
        }
    }

    #[test]
    fn test_read_stats_malformed_week_is_invalid() {
        let csv = "player_id,player_display_name,team,season,week,season_type\n\
                   00-1,Bad Week,KC,2024,first,REG\n";

        assert!(matches!(
            read_stats(csv.as_bytes()),
            Err(BetError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_read_snaps_keeps_percentages() {
        let csv = "season,week,team,player,pfr_player_id,offense_pct\n\
                   2024,1,LAR,Puka Nacua,NacuPu00,87\n\
                   2024,1,LAR,Tutu Atwell,AtweTu00,\n\
                   2024,2,LAR,Puka Nacua,NacuPu00,0.5\n";

        let rows = read_snaps(csv.as_bytes()).unwrap();
        // Row without a percentage is dropped
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].offense_pct, 87.0);
        assert_eq!(rows[0].team.as_str(), "LA");
        assert_eq!(rows[0].secondary_id, Some(SecondaryId::new("NacuPu00")));
        // Mixed scale: values above 1 mean the column is already percent
        assert_eq!(rows[1].offense_pct, 0.5);
    }

    #[test]
    fn test_read_snaps_scales_fractions() {
        let csv = "season,week,team,player,pfr_player_id,offense_pct\n\
                   2024,1,KC,Travis Kelce,KelcTr00,0.82\n\
                   2024,1,KC,Noah Gray,GrayNo00,0.4\n";

        let rows = read_snaps(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].offense_pct, 82.0);
        assert_eq!(rows[1].offense_pct, 40.0);
    }

    #[test]
    fn test_read_snaps_fractions_land_on_whole_percent() {
        let csv = "season,week,team,player,pfr_player_id,offense_pct\n\
                   2024,1,DET,Sam LaPorta,LaPoSa00,0.29\n\
                   2024,1,DET,Jameson Williams,WillJa10,0.57\n\
                   2024,1,DET,Kalif Raymond,RaymKa00,0.58\n\
                   2024,1,DET,Brock Wright,WrigBr03,0.825\n";

        let pcts: Vec<f64> = read_snaps(csv.as_bytes())
            .unwrap()
            .iter()
            .map(|r| r.offense_pct)
            .collect();
        assert_eq!(pcts, vec![29.0, 57.0, 58.0, 82.5]);
    }

    #[test]
    fn test_read_identities_skips_rows_without_gsis() {
        let csv = "gsis_id,display_name,pfr_id,espn_id\n\
                   00-0034857,Josh Allen,AlleJo02,3918298\n\
                   ,College Player,,\n\
                   00-0039999,No Pfr Yet,,\n";

        let rows = read_identities(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].secondary_id, Some(SecondaryId::new("AlleJo02")));
        assert_eq!(rows[1].secondary_id, None);
        assert_eq!(rows[1].display_name, "No Pfr Yet");
    }
}

#[cfg(test)]
mod tables_tests {
    use super::*;
    use std::collections::BTreeMap;

    fn stat_row(week: u16, season_type: SeasonType) -> StatRow {
        StatRow {
            season: Season::new(2024),
            week: Week::new(week),
            season_type,
            team: TeamCode::new("DET"),
            player_id: CanonicalId::new("00-0036963"),
            player_name: "Amon-Ra St. Brown".to_string(),
            stats: BTreeMap::new(),
        }
    }

    fn snap(pct: f64) -> SnapRecord {
        SnapRecord {
            season: Season::new(2024),
            week: Week::new(1),
            team: TeamCode::new("DET"),
            secondary_id: Some(SecondaryId::new("StxxAm00")),
            player_name: "Amon-Ra St. Brown".to_string(),
            offense_pct: pct,
        }
    }

    #[test]
    fn test_max_regular_week_ignores_postseason() {
        let tables = DatasetTables::new(
            vec![
                stat_row(4, SeasonType::Regular),
                stat_row(9, SeasonType::Regular),
                stat_row(20, SeasonType::Other),
            ],
            vec![],
            vec![],
        )
        .unwrap();

        assert_eq!(tables.max_regular_week(Season::new(2024)), Some(Week::new(9)));
        assert_eq!(tables.max_regular_week(Season::new(2023)), None);
    }

    #[test]
    fn test_rejects_out_of_range_snap_pct() {
        for bad in [-1.0, 100.5, f64::NAN] {
            match DatasetTables::new(vec![], vec![snap(50.0), snap(bad)], vec![]) {
                Err(BetError::InvalidTable { table, row, .. }) => {
                    assert_eq!(table, SNAPS_TABLE);
                    assert_eq!(row, 2);
                }
                other => panic!("Expected InvalidTable for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_rejects_non_finite_stat() {
        let row = stat_row(1, SeasonType::Regular).with_stat(StatCategory::RushingYards, f64::INFINITY);
        assert!(matches!(
            DatasetTables::new(vec![row], vec![], vec![]),
            Err(BetError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_rejects_week_zero() {
        assert!(DatasetTables::new(vec![stat_row(0, SeasonType::Regular)], vec![], vec![]).is_err());
    }

    #[test]
    fn test_first_identity_record_wins() {
        let first = IdentityRecord {
            canonical_id: CanonicalId::new("00-0036963"),
            secondary_id: Some(SecondaryId::new("StxxAm00")),
            display_name: "Amon-Ra St. Brown".to_string(),
        };
        let second = IdentityRecord {
            secondary_id: Some(SecondaryId::new("Other00")),
            ..first.clone()
        };

        let tables = DatasetTables::new(vec![], vec![], vec![first, second]).unwrap();
        assert_eq!(tables.identity_count(), 1);
        assert_eq!(
            tables
                .identity(&CanonicalId::new("00-0036963"))
                .and_then(|r| r.secondary_id.clone()),
            Some(SecondaryId::new("StxxAm00"))
        );
    }
}

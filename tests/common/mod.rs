//! CSV fixtures shared by the integration tests

#![allow(dead_code)]

use ffl_bets::data::parse::{read_identities, read_snaps, read_stats};
use ffl_bets::DatasetTables;

pub const STATS_CSV: &str = "\
player_id,player_display_name,recent_team,season,week,season_type,receptions,receiving_yards,receiving_tds,rushing_yards,rushing_tds,passing_yards,passing_tds,interceptions,fumbles_lost
00-0036963,Amon-Ra St. Brown,DET,2024,1,REG,5,80,1,0,0,0,0,0,0
00-0036963,Amon-Ra St. Brown,DET,2024,2,REG,10,100,NA,,,NA,NA,NA,0
00-0036963,Amon-Ra St. Brown,DET,2024,3,REG,1,5,0,0,0,0,0,0,0
00-0036963,Amon-Ra St. Brown,DET,2024,19,POST,8,120,2,0,0,0,0,0,0
00-0039999,Equanimeous St. Brown,CHI,2024,1,REG,2,20,0,0,0,0,0,0,0
00-0038000,Jahmyr Gibbs,DET,2024,1,REG,3,30,0,70,1,0,0,0,0
00-0038000,Jahmyr Gibbs,DET,2024,2,REG,0,0,0,40,0,0,0,0,0
";

/// Percentages stored as fractions, as some snap exports do
pub const SNAPS_CSV: &str = "\
season,week,team,player,pfr_player_id,offense_pct
2024,1,DET,Amon-Ra St. Brown,StBrAm00,0.92
2024,2,DET,Amon-Ra St. Brown,StBrAm00,0.88
2024,3,DET,Amon-Ra St. Brown,StBrAm00,0.20
2024,1,CHI,Equanimeous St. Brown,,0.30
2024,1,DET,Jahmyr Gibbs,GibbJa01,0.55
2024,2,DET,Sam LaPorta,LaPoSa00,
";

pub const PLAYERS_CSV: &str = "\
gsis_id,display_name,pfr_id
00-0036963,Amon-Ra St. Brown,StBrAm00
00-0038000,Jahmyr Gibbs,GibbJa01
00-0039999,Equanimeous St. Brown,NA
,Some Prospect,ProsXx00
";

pub fn fixture_tables() -> DatasetTables {
    DatasetTables::new(
        read_stats(STATS_CSV.as_bytes()).unwrap(),
        read_snaps(SNAPS_CSV.as_bytes()).unwrap(),
        read_identities(PLAYERS_CSV.as_bytes()).unwrap(),
    )
    .unwrap()
}

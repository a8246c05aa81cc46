//! Bet standings: both sides of every bet, scored against one snapshot

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::types::{Season, Week, WeekRange},
    data::DatasetTables,
    engine::{compute_ppg, format_ppg, round2, PpgQuery, PpgReport},
    storage::Bet,
    Result,
};

use super::bets::describe_bet;
use super::common::{participants_label, CommandContext};

/// Parameters for the standings command
#[derive(Debug, Clone, Default)]
pub struct StandingsParams {
    pub season: Option<Season>,
    pub data_dir: Option<std::path::PathBuf>,
    pub refresh: bool,
    pub all: bool,
    pub json: bool,
}

/// Who is ahead, and by how many points per game
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "leader", content = "margin")]
pub enum Leader {
    #[serde(rename = "TIED")]
    Tied,
    PlayerA(f64),
    PlayerB(f64),
}

impl Leader {
    /// Compare two rounded PPG values
    pub fn between(a: f64, b: f64) -> Self {
        let margin = round2(a - b);
        if margin > 0.0 {
            Leader::PlayerA(margin)
        } else if margin < 0.0 {
            Leader::PlayerB(-margin)
        } else {
            Leader::Tied
        }
    }
}

/// Current state of one bet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub bet: Bet,
    /// Bet weeks cut off at the latest published week
    pub weeks: WeekRange,
    pub side_a: PpgReport,
    pub side_b: PpgReport,
    pub leader: Leader,
}

impl Standing {
    pub fn leader_label(&self) -> String {
        match self.leader {
            Leader::Tied => "TIED".to_string(),
            Leader::PlayerA(margin) => format!("{} by {:.2}", self.bet.player_a, margin),
            Leader::PlayerB(margin) => format!("{} by {:.2}", self.bet.player_b, margin),
        }
    }
}

fn side_query(player: &str, bet: &Bet, weeks: WeekRange) -> PpgQuery {
    PpgQuery {
        player: player.to_string(),
        season: bet.season,
        weeks,
        min_snap: bet.min_snap,
        rule: bet.scoring,
    }
}

/// Score one bet. Both sides read the same snapshot.
pub fn compute_standing(tables: &DatasetTables, bet: &Bet, published: Option<Week>) -> Standing {
    let weeks = bet.weeks.through(published);
    let side_a = compute_ppg(tables, &side_query(&bet.player_a, bet, weeks));
    let side_b = compute_ppg(tables, &side_query(&bet.player_b, bet, weeks));
    let leader = Leader::between(
        side_a.aggregate.points_per_game,
        side_b.aggregate.points_per_game,
    );
    debug!(bet = %bet.id, ?leader, "standing computed");

    Standing {
        bet: bet.clone(),
        weeks,
        side_a,
        side_b,
        leader,
    }
}

/// Score many bets in parallel, keeping input order
pub fn compute_standings(tables: &DatasetTables, bets: &[Bet], published: Option<Week>) -> Vec<Standing> {
    bets.par_iter()
        .map(|bet| compute_standing(tables, bet, published))
        .collect()
}

/// Text block for one standing
pub fn render_standing(standing: &Standing, show_status: bool) -> String {
    let bet = &standing.bet;
    let status = match (show_status, bet.is_active) {
        (false, _) => "",
        (true, true) => "[ACTIVE] ",
        (true, false) => "[CLOSED] ",
    };

    let mut lines = vec![format!("{}{}", status, describe_bet(bet))];
    if standing.weeks != bet.weeks {
        lines.push(format!("• Scored through Weeks {}", standing.weeks));
    }
    lines.push(format!(
        "• {}: {}",
        bet.player_a,
        format_ppg(&standing.side_a.aggregate)
    ));
    lines.push(format!(
        "• {}: {}",
        bet.player_b,
        format_ppg(&standing.side_b.aggregate)
    ));
    for side in [&standing.side_a, &standing.side_b] {
        if side.is_ambiguous() {
            let names: Vec<&str> = side.matched_names.iter().map(String::as_str).collect();
            lines.push(format!(
                "⚠ \"{}\" matched {} players: {}",
                side.player,
                side.matched_ids.len(),
                names.join(", ")
            ));
        }
    }
    lines.push(format!("• Leader: {}", standing.leader_label()));
    lines.push(format!(
        "• Participants: {}",
        participants_label(&bet.participants)
    ));
    lines.join("\n")
}

/// Title line for a standings report
pub fn standings_title(season: Season, published: Option<Week>) -> String {
    match published {
        Some(week) => format!("Bet Standings — {} (Through Week {})", season, week),
        None => format!("Bet Standings — {} (No games published yet)", season),
    }
}

/// Handle the standings command
pub async fn handle_standings(params: StandingsParams) -> Result<()> {
    let ctx = CommandContext::new(params.season, params.data_dir.clone())?;
    let season = ctx.season();

    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let tables = ctx.load_tables(params.refresh).await?;
    let published = tables.max_regular_week(season);

    let mut db = ctx.open_database()?;
    if let Some(week) = published {
        let closed = db.close_completed(season, week)?;
        if closed > 0 {
            info!(closed, %week, "closed completed bets");
        }
    }

    let bets = if params.all {
        db.all_bets(season)?
    } else {
        db.active_bets(season)?
    };

    let standings = compute_standings(&tables, &bets, published);

    if params.json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
        return Ok(());
    }

    if standings.is_empty() {
        println!("No active bets yet. Create one with `ffl-bets bet add`.");
        return Ok(());
    }

    println!("{}", standings_title(season, published));
    for standing in &standings {
        println!();
        println!("{}", render_standing(standing, params.all));
    }

    Ok(())
}

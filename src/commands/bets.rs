//! Bet bookkeeping: create, edit and list bets

use crate::{
    cli::types::{BetId, Season, WeekRange},
    config::Config,
    engine::{ScoringRule, SnapThreshold},
    error::BetError,
    storage::{dedupe_participants, Bet, BetDatabase, BetUpdate, NewBet},
    Result,
};

use super::common::{open_database, participants_label, require_player_name};

/// Parameters for creating a bet
#[derive(Debug, Clone)]
pub struct AddBetParams {
    pub creator: String,
    pub player_a: String,
    pub player_b: String,
    pub participants: Vec<String>,
    pub scoring: ScoringRule,
    pub min_snap: SnapThreshold,
    pub start_week: u16,
    pub end_week: u16,
    pub description: String,
    pub season: Option<Season>,
}

/// Parameters for editing a bet. Unset fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct EditBetParams {
    pub bet_id: BetId,
    pub user: String,
    pub is_admin: bool,
    pub player_a: Option<String>,
    pub player_b: Option<String>,
    pub scoring: Option<ScoringRule>,
    pub min_snap: Option<SnapThreshold>,
    pub start_week: Option<u16>,
    pub end_week: Option<u16>,
    pub description: Option<String>,
    pub participants: Vec<String>,
    pub clear_participants: bool,
}

/// The creator or a league admin may edit a bet
pub fn can_edit(user: &str, creator: &str, is_admin: bool) -> bool {
    is_admin || user == creator
}

/// Validate and store a new bet. Weeks outside the regular season are clamped.
pub fn add_bet(db: &mut BetDatabase, season: Season, params: &AddBetParams) -> Result<Bet> {
    let new_bet = NewBet {
        creator: params.creator.trim().to_string(),
        player_a: require_player_name(&params.player_a)?,
        player_b: require_player_name(&params.player_b)?,
        description: params.description.trim().to_string(),
        scoring: params.scoring,
        min_snap: params.min_snap,
        season,
        weeks: WeekRange::clamped(params.start_week, params.end_week)?,
        participants: dedupe_participants(&params.participants),
    };

    Ok(db.insert_bet(&new_bet)?)
}

/// Apply an edit after checking permissions. Returns the updated bet.
pub fn edit_bet(db: &mut BetDatabase, params: &EditBetParams) -> Result<Bet> {
    let id = params.bet_id;
    let existing = db
        .get_bet(id)?
        .ok_or(BetError::BetNotFound { id: id.as_i64() })?;

    if !can_edit(&params.user, &existing.creator, params.is_admin) {
        return Err(BetError::PermissionDenied {
            user: params.user.clone(),
            id: id.as_i64(),
        });
    }

    let weeks = if params.start_week.is_some() || params.end_week.is_some() {
        let start = params
            .start_week
            .unwrap_or(existing.weeks.start().as_u16());
        let end = params.end_week.unwrap_or(existing.weeks.end().as_u16());
        Some(WeekRange::clamped(start, end)?)
    } else {
        None
    };

    let participants = if params.clear_participants {
        Some(Vec::new())
    } else if !params.participants.is_empty() {
        Some(dedupe_participants(&params.participants))
    } else {
        None
    };

    let update = BetUpdate {
        player_a: params
            .player_a
            .as_deref()
            .map(require_player_name)
            .transpose()?,
        player_b: params
            .player_b
            .as_deref()
            .map(require_player_name)
            .transpose()?,
        description: params.description.as_ref().map(|d| d.trim().to_string()),
        scoring: params.scoring,
        min_snap: params.min_snap,
        weeks,
        participants,
    };

    if update.is_empty() {
        return Err(BetError::NothingToUpdate);
    }

    db.update_bet(id, &update)?;
    db.get_bet(id)?
        .ok_or(BetError::BetNotFound { id: id.as_i64() })
}

/// One-line summary of a bet's terms
pub fn describe_bet(bet: &Bet) -> String {
    let mut line = format!(
        "#{} {} vs {} ({}, ≥{}% snaps, Weeks {})",
        bet.id, bet.player_a, bet.player_b, bet.scoring, bet.min_snap, bet.weeks
    );
    if !bet.description.is_empty() {
        line.push_str(&format!(" — {}", bet.description));
    }
    line
}

/// Handle `bet add`
pub fn handle_add_bet(params: AddBetParams) -> Result<()> {
    let config = Config::from_env()?;
    let season = params.season.unwrap_or(config.season);
    let mut db = open_database(&config)?;

    let bet = add_bet(&mut db, season, &params)?;
    println!(
        "✓ Bet created: {}. Participants: {}",
        describe_bet(&bet),
        participants_label(&bet.participants)
    );
    Ok(())
}

/// Handle `bet edit`
pub fn handle_edit_bet(params: EditBetParams) -> Result<()> {
    let config = Config::from_env()?;
    let mut db = open_database(&config)?;

    let bet = edit_bet(&mut db, &params)?;
    println!("✓ Bet #{} updated: {}", bet.id, describe_bet(&bet));
    Ok(())
}

/// Handle `bet list`: bets created by one user this season
pub fn handle_list_bets(creator: String, season: Option<Season>) -> Result<()> {
    let config = Config::from_env()?.with_overrides(season, None);
    let db = open_database(&config)?;

    let bets = db.bets_by_creator(creator.trim(), config.season)?;
    if bets.is_empty() {
        println!("You don't have any bets.");
        return Ok(());
    }

    for bet in bets {
        let status = if bet.is_active { "ACTIVE" } else { "CLOSED" };
        println!("[{}] {}", status, describe_bet(&bet));
        println!("• Participants: {}", participants_label(&bet.participants));
    }
    Ok(())
}

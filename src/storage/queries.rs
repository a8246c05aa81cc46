//! Bet record queries

use super::{models::*, schema::BetDatabase};
use crate::cli::types::{BetId, Season, Week, WeekRange};
use crate::engine::{ScoringRule, SnapThreshold};
use crate::error::BetError;
use anyhow::Result;
use rusqlite::{params, types::Type, OptionalExtension, Row, ToSql};
use std::time::{SystemTime, UNIX_EPOCH};

const BET_COLUMNS: &str = "id, creator, player_a, player_b, description, scoring, min_snap_pct,
                           season, start_week, end_week, participants, is_active, created_at";

fn conversion_error(idx: usize, err: BetError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn split_participants(raw: &str) -> Vec<String> {
    dedupe_participants(raw.split(','))
}

impl BetDatabase {
    /// Insert a new active bet and return it with its assigned id
    pub fn insert_bet(&mut self, bet: &NewBet) -> Result<Bet> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let participants = dedupe_participants(&bet.participants);

        self.conn.execute(
            "INSERT INTO bets
             (creator, player_a, player_b, description, scoring, min_snap_pct,
              season, start_week, end_week, participants, is_active, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?)",
            params![
                bet.creator,
                bet.player_a.trim(),
                bet.player_b.trim(),
                bet.description.trim(),
                bet.scoring.name(),
                bet.min_snap.value(),
                bet.season.as_u16(),
                bet.weeks.start().as_u16(),
                bet.weeks.end().as_u16(),
                participants.join(","),
                now as i64,
            ],
        )?;

        Ok(Bet {
            id: BetId::new(self.conn.last_insert_rowid()),
            creator: bet.creator.clone(),
            player_a: bet.player_a.trim().to_string(),
            player_b: bet.player_b.trim().to_string(),
            description: bet.description.trim().to_string(),
            scoring: bet.scoring,
            min_snap: bet.min_snap,
            season: bet.season,
            weeks: bet.weeks,
            participants,
            is_active: true,
            created_at: now,
        })
    }

    /// Get a bet by id
    pub fn get_bet(&self, id: BetId) -> Result<Option<Bet>> {
        let sql = format!("SELECT {} FROM bets WHERE id = ?", BET_COLUMNS);
        let bet = self
            .conn
            .query_row(&sql, params![id.as_i64()], |row| Self::row_to_bet(row))
            .optional()?;
        Ok(bet)
    }

    /// Apply a partial update. Returns false when no bet has that id.
    pub fn update_bet(&mut self, id: BetId, update: &BetUpdate) -> Result<bool> {
        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(player_a) = &update.player_a {
            sets.push("player_a = ?");
            values.push(Box::new(player_a.trim().to_string()));
        }
        if let Some(player_b) = &update.player_b {
            sets.push("player_b = ?");
            values.push(Box::new(player_b.trim().to_string()));
        }
        if let Some(description) = &update.description {
            sets.push("description = ?");
            values.push(Box::new(description.trim().to_string()));
        }
        if let Some(scoring) = update.scoring {
            sets.push("scoring = ?");
            values.push(Box::new(scoring.name()));
        }
        if let Some(min_snap) = update.min_snap {
            sets.push("min_snap_pct = ?");
            values.push(Box::new(min_snap.value()));
        }
        if let Some(weeks) = update.weeks {
            sets.push("start_week = ?");
            values.push(Box::new(weeks.start().as_u16()));
            sets.push("end_week = ?");
            values.push(Box::new(weeks.end().as_u16()));
        }
        if let Some(participants) = &update.participants {
            sets.push("participants = ?");
            values.push(Box::new(dedupe_participants(participants).join(",")));
        }

        if sets.is_empty() {
            return Ok(self.get_bet(id)?.is_some());
        }

        let sql = format!("UPDATE bets SET {} WHERE id = ?", sets.join(", "));
        values.push(Box::new(id.as_i64()));
        let param_refs: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();

        let rows_affected = self.conn.execute(&sql, &param_refs[..])?;
        Ok(rows_affected > 0)
    }

    /// Active bets for a season, oldest first
    pub fn active_bets(&self, season: Season) -> Result<Vec<Bet>> {
        self.query_bets(
            "WHERE season = ? AND is_active = 1 ORDER BY id",
            &[&season.as_u16()],
        )
    }

    /// Every bet for a season, active or closed
    pub fn all_bets(&self, season: Season) -> Result<Vec<Bet>> {
        self.query_bets("WHERE season = ? ORDER BY id", &[&season.as_u16()])
    }

    /// Bets a user created in a season
    pub fn bets_by_creator(&self, creator: &str, season: Season) -> Result<Vec<Bet>> {
        self.query_bets(
            "WHERE creator = ? AND season = ? ORDER BY id",
            &[&creator, &season.as_u16()],
        )
    }

    /// Close active bets whose last week has been published. Returns how
    /// many bets were closed.
    pub fn close_completed(&mut self, season: Season, max_week: Week) -> Result<usize> {
        let closed = self.conn.execute(
            "UPDATE bets SET is_active = 0
             WHERE season = ? AND is_active = 1 AND end_week <= ?",
            params![season.as_u16(), max_week.as_u16()],
        )?;
        Ok(closed)
    }

    fn query_bets(&self, filter: &str, params: &[&dyn ToSql]) -> Result<Vec<Bet>> {
        let sql = format!("SELECT {} FROM bets {}", BET_COLUMNS, filter);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params, |row| Self::row_to_bet(row))?;

        let mut bets = Vec::new();
        for row in rows {
            bets.push(row?);
        }
        Ok(bets)
    }

    fn row_to_bet(row: &Row) -> rusqlite::Result<Bet> {
        let scoring: String = row.get(5)?;
        let scoring = scoring
            .parse::<ScoringRule>()
            .map_err(|e| conversion_error(5, e))?;
        let min_snap =
            SnapThreshold::new(row.get::<_, f64>(6)?).map_err(|e| conversion_error(6, e))?;
        let weeks = WeekRange::new(row.get(8)?, row.get(9)?).map_err(|e| conversion_error(8, e))?;
        let participants: String = row.get(10)?;
        let created_at: i64 = row.get(12)?;

        Ok(Bet {
            id: BetId::new(row.get(0)?),
            creator: row.get(1)?,
            player_a: row.get(2)?,
            player_b: row.get(3)?,
            description: row.get(4)?,
            scoring,
            min_snap,
            season: Season::new(row.get(7)?),
            weeks,
            participants: split_participants(&participants),
            is_active: row.get(11)?,
            created_at: created_at.max(0) as u64,
        })
    }
}

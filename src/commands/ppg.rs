//! One-off PPG query for a single player name

use std::path::PathBuf;

use crate::{
    cli::types::{Season, WeekRange},
    engine::{compute_ppg, format_ppg, PpgQuery, PpgReport, ScoringRule, SnapSource, SnapThreshold},
    Result,
};

use super::common::{require_player_name, CommandContext};

/// Parameters for the ppg command
#[derive(Debug, Clone)]
pub struct PpgParams {
    pub player: String,
    pub season: Option<Season>,
    pub start_week: u16,
    pub end_week: u16,
    pub min_snap: SnapThreshold,
    pub scoring: ScoringRule,
    pub json: bool,
    pub verbose: bool,
    pub refresh: bool,
    pub data_dir: Option<PathBuf>,
}

/// Validate parameters into an engine query
pub fn build_query(params: &PpgParams, season: Season) -> Result<PpgQuery> {
    Ok(PpgQuery {
        player: require_player_name(&params.player)?,
        season,
        weeks: WeekRange::new(params.start_week, params.end_week)?,
        min_snap: params.min_snap,
        rule: params.scoring,
    })
}

/// Human-readable summary, optionally followed by the game log
pub fn render_report(report: &PpgReport, query: &PpgQuery, verbose: bool) -> String {
    let mut out = format!(
        "{}: {} ({}, ≥{}% snaps, Weeks {})",
        report.player,
        format_ppg(&report.aggregate),
        query.rule,
        query.min_snap,
        query.weeks
    );

    if report.is_ambiguous() {
        let names: Vec<&str> = report.matched_names.iter().map(String::as_str).collect();
        out.push_str(&format!(
            "\n⚠ \"{}\" matched {} players: {}",
            report.player,
            report.matched_ids.len(),
            names.join(", ")
        ));
    }

    if verbose {
        for game in &report.games {
            let source = match game.snap_source {
                SnapSource::Joined(_) => "",
                SnapSource::Defaulted => " (no snap record)",
            };
            out.push_str(&format!(
                "\n  W{:<2} {:<4} {:<24} {:>6.1}%{} {:>6.2} pts{}",
                game.week.as_u16(),
                game.team.as_str(),
                game.player_name,
                game.snap_pct,
                source,
                game.points,
                if game.qualified { "" } else { "  (did not qualify)" }
            ));
        }
    }

    out
}

/// Handle the ppg command
pub async fn handle_ppg(params: PpgParams) -> Result<()> {
    let ctx = CommandContext::new(params.season, params.data_dir.clone())?;
    let query = build_query(&params, ctx.season())?;

    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let tables = ctx.load_tables(params.refresh).await?;
    let report = compute_ppg(&tables, &query);

    if params.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report, &query, params.verbose));
    }

    Ok(())
}

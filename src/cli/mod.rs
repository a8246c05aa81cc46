//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{BetId, Season};

use crate::engine::{ScoringRule, SnapThreshold};

/// Data-source arguments shared between commands that read stats
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Season year (or set `FFL_BETS_SEASON` env var).
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Read the CSV tables from this directory instead of downloading them
    /// (or set `FFL_BETS_DATA_DIR`).
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// Ignore cached tables and download fresh copies.
    #[clap(long)]
    pub refresh: bool,
}

#[derive(Debug, Subcommand)]
pub enum BetCmd {
    /// Create a PPG bet between two players
    Add {
        /// Who is making the bet.
        #[clap(long)]
        creator: String,

        /// First player (name or name fragment).
        player_a: String,

        /// Second player (name or name fragment).
        player_b: String,

        /// Scoring preset: PPR, HALF or STD.
        #[clap(long, default_value_t = ScoringRule::default())]
        scoring: ScoringRule,

        /// Minimum offensive snap percentage for a game to count.
        #[clap(long = "min-snap-pct", default_value_t = SnapThreshold::default())]
        min_snap: SnapThreshold,

        #[clap(long, default_value_t = 1)]
        start_week: u16,

        #[clap(long, default_value_t = 18)]
        end_week: u16,

        /// Participant ids (repeatable): `-p 1 -p 2`.
        #[clap(long = "participant", short = 'p')]
        participants: Vec<String>,

        /// Free-form note shown with the bet.
        #[clap(long, default_value = "")]
        description: String,

        /// Season year (or set `FFL_BETS_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,
    },

    /// Edit a bet you created (admins may edit any bet)
    Edit {
        /// Bet id, with or without a leading `#`.
        bet_id: BetId,

        /// Who is editing.
        #[clap(long)]
        user: String,

        #[clap(long)]
        admin: bool,

        #[clap(long)]
        player_a: Option<String>,

        #[clap(long)]
        player_b: Option<String>,

        #[clap(long)]
        scoring: Option<ScoringRule>,

        #[clap(long = "min-snap-pct")]
        min_snap: Option<SnapThreshold>,

        #[clap(long)]
        start_week: Option<u16>,

        #[clap(long)]
        end_week: Option<u16>,

        #[clap(long)]
        description: Option<String>,

        /// Replace the participant list (repeatable).
        #[clap(long = "participant", short = 'p', conflicts_with = "clear_participants")]
        participants: Vec<String>,

        /// Remove every participant.
        #[clap(long)]
        clear_participants: bool,
    },

    /// List bets created by one user
    List {
        #[clap(long)]
        creator: String,

        /// Season year (or set `FFL_BETS_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "ffl-bets", about = "Fantasy football PPG bets")]
pub struct FflBets {
    /// Log debug output to stderr (`RUST_LOG` takes precedence).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Points per game for one player over a week range.
    ///
    /// The player is matched by case-insensitive substring on the display
    /// name; only games at or above the snap threshold count.
    Ppg {
        /// Player name or name fragment (case-insensitive substring match).
        #[clap(long, short = 'n')]
        player: String,

        #[clap(flatten)]
        data: DataArgs,

        #[clap(long, default_value_t = 1)]
        start_week: u16,

        #[clap(long, default_value_t = 18)]
        end_week: u16,

        /// Minimum offensive snap percentage for a game to count.
        #[clap(long = "min-snap-pct", default_value_t = SnapThreshold::default())]
        min_snap: SnapThreshold,

        /// Scoring preset: PPR, HALF or STD.
        #[clap(long, default_value_t = ScoringRule::default())]
        scoring: ScoringRule,

        /// Output the full report as JSON.
        #[clap(long)]
        json: bool,

        /// Print every game that was considered.
        #[clap(long)]
        games: bool,
    },

    /// Manage bets
    Bet {
        #[clap(subcommand)]
        cmd: BetCmd,
    },

    /// Current standings for this season's bets
    Standings {
        #[clap(flatten)]
        data: DataArgs,

        /// Include closed bets.
        #[clap(long)]
        all: bool,

        /// Output standings as JSON.
        #[clap(long)]
        json: bool,
    },
}

//! Fantasy Football PPG Bets Library
//!
//! Settles "who scores more per game" bets between two NFL players using
//! nflverse weekly stats and snap counts.
//!
//! ## Features
//!
//! - **Name Resolution**: Case-insensitive substring match on display names
//! - **Snap Join**: Offensive snap % by PFR id, falling back to name, else 0.0
//! - **Scoring Presets**: PPR, HALF and STD
//! - **Qualifying PPG**: Only games at or above a snap threshold count
//! - **Bet Storage**: SQLite-backed bets with per-season standings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_bets::{compute_ppg, format_ppg, PpgQuery, ScoringRule, Season, SnapThreshold, WeekRange};
//! use ffl_bets::data::DataSource;
//!
//! # async fn example() -> ffl_bets::Result<()> {
//! let source = DataSource::local("./data");
//! let tables = source.load(Season::new(2024), false).await?;
//!
//! let report = compute_ppg(
//!     &tables,
//!     &PpgQuery {
//!         player: "Josh Allen".to_string(),
//!         season: Season::new(2024),
//!         weeks: WeekRange::new(1, 18)?,
//!         min_snap: SnapThreshold::default(),
//!         rule: ScoringRule::Ppr,
//!     },
//! );
//! println!("{}", format_ppg(&report.aggregate));
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FFL_BETS_SEASON=2024
//! export FFL_BETS_DATA_DIR=./data   # read local CSVs instead of downloading
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod data;
pub mod engine;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{BetId, CanonicalId, SecondaryId, Season, TeamCode, Week, WeekRange};
pub use data::DatasetTables;
pub use engine::{
    compute_ppg, format_ppg, AggregateResult, PpgQuery, PpgReport, ScoringRule, SnapThreshold,
};
pub use error::{BetError, Result};

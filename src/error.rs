//! Error types for the fantasy bet tracker

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BetError>;

#[derive(Error, Debug)]
pub enum BetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Input table `{table}` unavailable: {reason}")]
    InputTables { table: String, reason: String },

    #[error("Input table `{table}` is invalid at row {row}: {reason}")]
    InvalidTable {
        table: String,
        row: usize,
        reason: String,
    },

    #[error("Scoring must be one of: PPR, HALF, STD (got `{name}`)")]
    InvalidScoring { name: String },

    #[error("Invalid week range {start}-{end}: weeks must satisfy 1 <= start <= end <= 18")]
    InvalidWeekRange { start: u16, end: u16 },

    #[error("min_snap_pct must be between 0 and 100 (got {value})")]
    InvalidSnapThreshold { value: f64 },

    #[error("min_snap_pct must be a number between 0 and 100 (got `{input}`)")]
    UnparsableSnapThreshold { input: String },

    #[error("Player name must not be empty")]
    EmptyPlayerName,

    #[error("Bet not found: #{id}")]
    BetNotFound { id: i64 },

    #[error("User {user} does not have permission to edit bet #{id}")]
    PermissionDenied { user: String, id: i64 },

    #[error("Nothing to update. Provide at least one field.")]
    NothingToUpdate,

    #[error("Could not determine cache directory")]
    NoCacheDir,
}

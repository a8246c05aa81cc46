//! Dataset layer: the three weekly tables the engine reads
//!
//! - `models`: row types (stat lines, identity records, snap records)
//! - `parse`: CSV readers for the nflverse file formats
//! - `tables`: validated, indexed snapshot handed to the engine
//! - `source`: local / remote loading with file and in-memory caching

pub mod models;
pub mod parse;
pub mod source;
pub mod tables;

#[cfg(test)]
mod tests;

pub use models::{IdentityRecord, SeasonType, SnapRecord, StatCategory, StatRow};
pub use source::{DataSource, DatasetFile};
pub use tables::DatasetTables;

pub const STATS_TABLE: &str = "player_stats";
pub const SNAPS_TABLE: &str = "snap_counts";
pub const IDENTITY_TABLE: &str = "players";

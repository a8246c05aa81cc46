//! Command implementations for the ffl-bets CLI

pub mod bets;
pub mod common;
pub mod ppg;
pub mod standings;

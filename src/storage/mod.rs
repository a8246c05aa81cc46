//! Storage layer for bet records
//!
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Bet CRUD and season bookkeeping

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::BetDatabase;

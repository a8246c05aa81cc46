//! Type-safe wrappers for seasons, weeks and identifiers.

pub mod ids;
pub mod time;

pub use ids::{BetId, CanonicalId, SecondaryId, TeamCode};
pub use time::{Season, Week, WeekRange};

//! Time-related types for NFL seasons and regular-season weeks.

use crate::error::{BetError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First week of the regular season.
pub const FIRST_WEEK: u16 = 1;

/// Last week of the regular season.
pub const LAST_REGULAR_WEEK: u16 = 18;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = BetError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(FIRST_WEEK)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = BetError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Inclusive range of regular-season weeks.
///
/// Always satisfies `1 <= start <= end <= 18`.
///
/// # Examples
///
/// ```rust
/// use ffl_bets::WeekRange;
///
/// let weeks = WeekRange::new(3, 9).unwrap();
/// assert!(weeks.contains(ffl_bets::Week::new(9)));
/// assert!(WeekRange::new(9, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekRange {
    start: Week,
    end: Week,
}

impl WeekRange {
    /// Build a range, rejecting bounds outside the regular season or reversed.
    pub fn new(start: u16, end: u16) -> Result<Self> {
        if start < FIRST_WEEK || end > LAST_REGULAR_WEEK || start > end {
            return Err(BetError::InvalidWeekRange { start, end });
        }
        Ok(Self {
            start: Week(start),
            end: Week(end),
        })
    }

    /// Clamp both bounds into the regular season, then validate ordering.
    pub fn clamped(start: u16, end: u16) -> Result<Self> {
        Self::new(
            start.clamp(FIRST_WEEK, LAST_REGULAR_WEEK),
            end.clamp(FIRST_WEEK, LAST_REGULAR_WEEK),
        )
    }

    /// The whole regular season.
    pub fn full_season() -> Self {
        Self {
            start: Week(FIRST_WEEK),
            end: Week(LAST_REGULAR_WEEK),
        }
    }

    pub fn start(&self) -> Week {
        self.start
    }

    pub fn end(&self) -> Week {
        self.end
    }

    pub fn contains(&self, week: Week) -> bool {
        self.start <= week && week <= self.end
    }

    /// Shrink the end of the range to the latest published week.
    ///
    /// Returns the range unchanged when nothing is published yet or when the
    /// published week precedes the start.
    pub fn through(&self, published: Option<Week>) -> Self {
        match published {
            Some(max) if max >= self.start && max < self.end => Self {
                start: self.start,
                end: max,
            },
            _ => *self,
        }
    }
}

impl Default for WeekRange {
    fn default() -> Self {
        Self::full_season()
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

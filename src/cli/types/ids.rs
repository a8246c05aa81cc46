//! Identifier types for players, teams and bets.

use crate::error::{BetError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary cross-system player key (nflverse GSIS id, e.g. `00-0034857`).
///
/// Links weekly statistics to identity records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalId(pub String);

impl CanonicalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player key used by the snap-count source (Pro Football Reference id,
/// e.g. `AlleJo02`), looked up through the identity map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SecondaryId(pub String);

impl SecondaryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecondaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NFL team abbreviation, normalised to the nflverse spelling.
///
/// Sources disagree on a handful of codes (`LAR` vs `LA`, `JAC` vs `JAX`, ...),
/// so every code is folded onto one spelling when it is constructed.
///
/// # Examples
///
/// ```rust
/// use ffl_bets::TeamCode;
///
/// assert_eq!(TeamCode::new("lar"), TeamCode::new("LA"));
/// assert_eq!(TeamCode::new(" wsh ").as_str(), "WAS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamCode(String);

impl TeamCode {
    pub fn new(code: &str) -> Self {
        let upper = code.trim().to_uppercase();
        let canonical = match upper.as_str() {
            "LAR" => "LA",
            "JAC" => "JAX",
            "WSH" => "WAS",
            "LVR" => "LV",
            "GNB" => "GB",
            "KAN" => "KC",
            "NWE" => "NE",
            "NOR" => "NO",
            "SFO" => "SF",
            "TAM" => "TB",
            "ARZ" => "ARI",
            "BLT" => "BAL",
            "CLV" => "CLE",
            "HST" => "HOU",
            other => other,
        };
        Self(canonical.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Row id of a stored bet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BetId(pub i64);

impl BetId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BetId {
    type Err = BetError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().trim_start_matches('#').parse::<u32>()?.into()))
    }
}

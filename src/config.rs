//! Runtime configuration: season, cache and database locations, data sources.
//!
//! Everything has a built-in default; environment variables override the
//! defaults and CLI flags override the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::types::Season;
use crate::error::{BetError, Result};

pub const SEASON_ENV_VAR: &str = "FFL_BETS_SEASON";
pub const CACHE_DIR_ENV_VAR: &str = "FFL_BETS_CACHE_DIR";
pub const DB_PATH_ENV_VAR: &str = "FFL_BETS_DB";
pub const DATA_DIR_ENV_VAR: &str = "FFL_BETS_DATA_DIR";

/// Downloaded tables are reused for this long before being fetched again.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

const APP_DIR: &str = "ffl-bets";

#[derive(Debug, Clone)]
pub struct Config {
    pub season: Season,
    pub cache_dir: PathBuf,
    pub db_path: PathBuf,
    pub cache_ttl: Duration,
    /// Read `player_stats_{season}.csv`, `snap_counts_{season}.csv` and
    /// `players.csv` from here instead of downloading them.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Build the configuration from defaults and environment variables.
    pub fn from_env() -> Result<Self> {
        let cache_dir = match std::env::var(CACHE_DIR_ENV_VAR) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_cache_dir()?,
        };
        let db_path = match std::env::var(DB_PATH_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => cache_dir.join("bets.sqlite"),
        };
        let data_dir = std::env::var(DATA_DIR_ENV_VAR)
            .ok()
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            season: resolve_season(None)?,
            cache_dir,
            db_path,
            cache_ttl: DEFAULT_CACHE_TTL,
            data_dir,
        })
    }

    /// Apply CLI overrides on top of the environment.
    pub fn with_overrides(mut self, season: Option<Season>, data_dir: Option<PathBuf>) -> Self {
        if let Some(season) = season {
            self.season = season;
        }
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }
}

/// Resolve the season from CLI option or environment variable, falling back
/// to the built-in default season.
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    if let Some(season) = season {
        return Ok(season);
    }
    match std::env::var(SEASON_ENV_VAR) {
        Ok(value) => value.parse(),
        Err(_) => Ok(Season::default()),
    }
}

fn default_cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().ok_or(BetError::NoCacheDir)?;
    Ok(base.join(APP_DIR))
}

//! Dataset source: loads the three tables for a season from a local
//! directory or from the nflverse release assets, with a file cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use super::parse::{read_identities, read_snaps, read_stats};
use super::tables::DatasetTables;
use super::{IDENTITY_TABLE, SNAPS_TABLE, STATS_TABLE};
use crate::cli::types::Season;
use crate::config::Config;
use crate::core::cache::{try_read_fresh, write_bytes, MemoryCache};
use crate::error::{BetError, Result};

/// Base path for nflverse data releases.
pub const NFLVERSE_BASE_URL: &str = "https://github.com/nflverse/nflverse-data/releases/download";

/// Snap counts are published from the PFR mirror repository.
pub const NFLVERSE_PFR_BASE_URL: &str = "https://github.com/nflverse/nflverse-pfr/releases/download";

/// The three files that make up one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFile {
    PlayerStats,
    SnapCounts,
    Players,
}

impl DatasetFile {
    pub fn table_name(&self) -> &'static str {
        match self {
            DatasetFile::PlayerStats => STATS_TABLE,
            DatasetFile::SnapCounts => SNAPS_TABLE,
            DatasetFile::Players => IDENTITY_TABLE,
        }
    }

    pub fn file_name(&self, season: Season) -> String {
        match self {
            DatasetFile::PlayerStats => format!("player_stats_{}.csv", season),
            DatasetFile::SnapCounts => format!("snap_counts_{}.csv", season),
            DatasetFile::Players => "players.csv".to_string(),
        }
    }

    pub fn url(&self, season: Season) -> String {
        match self {
            DatasetFile::PlayerStats => format!(
                "{NFLVERSE_BASE_URL}/player_stats/stats_player_week_{}.csv",
                season
            ),
            DatasetFile::SnapCounts => format!(
                "{NFLVERSE_PFR_BASE_URL}/snap_counts/snap_counts_{}.csv",
                season
            ),
            DatasetFile::Players => format!("{NFLVERSE_BASE_URL}/players/players.csv"),
        }
    }
}

/// Where table bytes come from.
#[derive(Debug, Clone)]
enum Origin {
    Local(PathBuf),
    Remote {
        client: Client,
        cache_dir: PathBuf,
        ttl: Duration,
    },
}

/// Loads `DatasetTables` snapshots, one per season, and keeps the most
/// recent ones in memory.
pub struct DataSource {
    origin: Origin,
    snapshots: MemoryCache<Season, DatasetTables>,
}

impl DataSource {
    /// Read tables from CSV files in `dir`.
    pub fn local(dir: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::Local(dir.into()),
            snapshots: MemoryCache::new(4),
        }
    }

    /// Download tables, caching the raw files under `cache_dir` for `ttl`.
    pub fn remote(cache_dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            origin: Origin::Remote {
                client: Client::new(),
                cache_dir: cache_dir.into(),
                ttl,
            },
            snapshots: MemoryCache::new(4),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.data_dir {
            Some(dir) => Self::local(dir.clone()),
            None => Self::remote(config.cache_dir.join("data"), config.cache_ttl),
        }
    }

    /// Load (or reuse) the snapshot for `season`.
    ///
    /// Any failure to fetch or parse a table is reported as
    /// `BetError::InputTables` / `BetError::InvalidTable`, never as an empty
    /// snapshot.
    pub async fn load(&self, season: Season, refresh: bool) -> Result<Arc<DatasetTables>> {
        if refresh {
            self.snapshots.invalidate(&season);
        } else if let Some(tables) = self.snapshots.get(&season) {
            debug!(%season, "reusing in-memory snapshot");
            return Ok(tables);
        }

        let stats = self.read(DatasetFile::PlayerStats, season, refresh).await?;
        let snaps = self.read(DatasetFile::SnapCounts, season, refresh).await?;
        let players = self.read(DatasetFile::Players, season, refresh).await?;

        let tables = DatasetTables::new(
            read_stats(stats.as_slice())?,
            read_snaps(snaps.as_slice())?,
            read_identities(players.as_slice())?,
        )?;
        let tables = Arc::new(tables);
        self.snapshots.put(season, Arc::clone(&tables));
        Ok(tables)
    }

    async fn read(&self, file: DatasetFile, season: Season, refresh: bool) -> Result<Vec<u8>> {
        match &self.origin {
            Origin::Local(dir) => read_local(dir, file, season),
            Origin::Remote {
                client,
                cache_dir,
                ttl,
            } => {
                let path = cache_dir.join(file.file_name(season));
                if !refresh {
                    if let Some(bytes) = try_read_fresh(&path, *ttl) {
                        debug!(path = %path.display(), "cache hit");
                        return Ok(bytes);
                    }
                }

                let bytes = fetch(client, file, season).await?;
                if let Err(e) = write_bytes(&path, &bytes) {
                    debug!(path = %path.display(), error = %e, "could not write cache file");
                }
                Ok(bytes)
            }
        }
    }
}

fn read_local(dir: &Path, file: DatasetFile, season: Season) -> Result<Vec<u8>> {
    let path = dir.join(file.file_name(season));
    std::fs::read(&path).map_err(|e| BetError::InputTables {
        table: file.table_name().to_string(),
        reason: format!("{}: {}", path.display(), e),
    })
}

async fn fetch(client: &Client, file: DatasetFile, season: Season) -> Result<Vec<u8>> {
    let url = file.url(season);
    info!(%url, "downloading {}", file.table_name());

    let unavailable = |e: reqwest::Error| BetError::InputTables {
        table: file.table_name().to_string(),
        reason: e.to_string(),
    };

    let bytes = client
        .get(&url)
        .timeout(Duration::from_secs(60))
        .send()
        .await
        .map_err(unavailable)?
        .error_for_status()
        .map_err(unavailable)?
        .bytes()
        .await
        .map_err(unavailable)?;

    Ok(bytes.to_vec())
}

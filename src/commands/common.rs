//! Common utilities and helper functions shared across commands.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::{
    cli::types::Season,
    config::Config,
    data::{DataSource, DatasetTables},
    error::BetError,
    storage::BetDatabase,
    Result,
};

/// Context containing the resources most commands need
pub struct CommandContext {
    pub config: Config,
    pub source: DataSource,
}

impl CommandContext {
    /// Resolve configuration from env + CLI overrides and set up the data source
    pub fn new(season: Option<Season>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config = Config::from_env()?.with_overrides(season, data_dir);
        let source = DataSource::from_config(&config);
        Ok(Self { config, source })
    }

    pub fn season(&self) -> Season {
        self.config.season
    }

    /// Load the configured season's tables.
    pub async fn load_tables(&self, refresh: bool) -> Result<Arc<DatasetTables>> {
        let tables = self.source.load(self.config.season, refresh).await?;
        info!(
            season = %self.config.season,
            stats = tables.stats().len(),
            snaps = tables.snap_row_count(),
            identities = tables.identity_count(),
            "tables loaded"
        );
        Ok(tables)
    }

    pub fn open_database(&self) -> Result<BetDatabase> {
        open_database(&self.config)
    }
}

pub fn open_database(config: &Config) -> Result<BetDatabase> {
    Ok(BetDatabase::open(&config.db_path)?)
}

/// Reject blank player names before they reach storage or the engine
pub fn require_player_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BetError::EmptyPlayerName);
    }
    Ok(trimmed.to_string())
}

/// Render participant ids as a display list, or a dash when empty
pub fn participants_label(participants: &[String]) -> String {
    if participants.is_empty() {
        "—".to_string()
    } else {
        participants.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_player_name() {
        assert_eq!(require_player_name("  Bijan Robinson ").unwrap(), "Bijan Robinson");
        assert!(matches!(
            require_player_name("   "),
            Err(BetError::EmptyPlayerName)
        ));
    }

    #[test]
    fn test_participants_label() {
        assert_eq!(participants_label(&[]), "—");
        assert_eq!(
            participants_label(&["1".to_string(), "2".to_string()]),
            "1, 2"
        );
    }
}

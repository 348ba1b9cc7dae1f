//! Builder for creating and configuring TripStore instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::TripStore;
use crate::{
    db::Database,
    error::{Result, TripError},
};

/// Builder for creating and configuring TripStore instances.
#[derive(Debug, Clone, Default)]
pub struct TripStoreBuilder {
    database_path: Option<PathBuf>,
}

impl TripStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tripguru/tripguru.db` or
    /// `~/.local/share/tripguru/tripguru.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store, creating the database file and schema
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns `TripError::FileSystem` if the database directory cannot be
    /// created. Returns `TripError::Database` if database initialization
    /// fails.
    pub async fn build(self) -> Result<TripStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop)).await??;

        Ok(TripStore::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tripguru")
            .place_data_file("tripguru.db")
            .map_err(|e| TripError::XdgDirectory(e.to_string()))
    }
}

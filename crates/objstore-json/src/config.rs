use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Flush strategy applied to each record write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// `fsync` the temporary file before it is renamed into place.
    EveryWrite,
    /// Rely on OS page-cache buffering.
    #[default]
    OsDefault,
}

/// Configuration for a [`FileRecordStore`](crate::FileRecordStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one file per record. Created on open if missing.
    pub root: PathBuf,
    /// Sync strategy for writes.
    pub sync_mode: SyncMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("StorageLocation"),
            sync_mode: SyncMode::default(),
        }
    }
}

impl StoreConfig {
    /// Configuration rooted at `root` with default settings otherwise.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Override the sync strategy.
    pub fn with_sync_mode(mut self, sync_mode: SyncMode) -> Self {
        self.sync_mode = sync_mode;
        self
    }
}

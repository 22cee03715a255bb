use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use objstore_types::{Identity, Record};
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::{StoreConfig, SyncMode};
use crate::error::{StoreError, StoreResult};
use crate::traits::RecordStore;

/// Record store keeping one JSON file per identity.
///
/// On-disk layout:
/// ```text
/// <root>/<identity>     UTF-8 JSON object of the record's properties
/// ```
///
/// The file name is the lowercase hyphenated identity. Writes land in a
/// `.tmp*` file inside the root and are renamed over the target, so a reader
/// sees either the previous record or the new one.
pub struct FileRecordStore {
    config: StoreConfig,
}

impl FileRecordStore {
    /// Open (or create) a store rooted at `root` with default settings.
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        Self::with_config(StoreConfig::new(root))
    }

    /// Open (or create) a store from a full configuration.
    ///
    /// The root directory and its parents are created if absent. Writability
    /// is not checked until the first put.
    pub fn with_config(config: StoreConfig) -> StoreResult<Self> {
        fs::create_dir_all(&config.root).map_err(|e| StoreError::from_io(e, &config.root))?;
        info!(root = %config.root.display(), sync_mode = ?config.sync_mode, "record store opened");
        Ok(Self { config })
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// The active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Path of the file backing `id`.
    pub fn path_for(&self, id: &Identity) -> PathBuf {
        self.config.root.join(id.to_string())
    }

    fn write_atomic(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.config.root)?;
        tmp.write_all(data)?;
        if matches!(self.config.sync_mode, SyncMode::EveryWrite) {
            tmp.as_file().sync_all()?;
        }
        tmp.persist(path).map_err(|e| e.error)?;
        // The rename is only durable once the directory entry is synced.
        #[cfg(unix)]
        if matches!(self.config.sync_mode, SyncMode::EveryWrite) {
            fs::File::open(&self.config.root)?.sync_all()?;
        }
        Ok(())
    }
}

impl RecordStore for FileRecordStore {
    fn put(&self, record: Record) -> StoreResult<Record> {
        let path = self.path_for(&record.id);
        let data = serde_json::to_vec(&record.properties)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.write_atomic(&path, &data)
            .map_err(|e| StoreError::from_write_io(e, &path))?;

        debug!(id = %record.id, bytes = data.len(), "record written");
        Ok(record)
    }

    fn get(&self, id: &Identity) -> StoreResult<Record> {
        let path = self.path_for(id);
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(StoreError::NotFound(*id)),
            Err(e) => return Err(StoreError::from_io(e, &path)),
        };

        let value: Value = serde_json::from_slice(&contents).map_err(|e| {
            warn!(id = %id, error = %e, "stored record is not valid JSON");
            StoreError::CorruptRecord {
                id: *id,
                reason: e.to_string(),
            }
        })?;

        let properties = match value {
            Value::Object(properties) => properties,
            other => {
                warn!(id = %id, "stored record is not a JSON object");
                return Err(StoreError::CorruptRecord {
                    id: *id,
                    reason: format!("expected a JSON object, found {}", json_kind(&other)),
                });
            }
        };

        debug!(id = %id, properties = properties.len(), "record read");
        Ok(Record::with_properties(*id, properties))
    }

    fn delete(&self, id: &Identity) -> StoreResult<()> {
        let path = self.path_for(id);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(id = %id, "record deleted");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound(*id)),
            Err(e) => Err(StoreError::from_io(e, &path)),
        }
    }

    fn exists(&self, id: &Identity) -> StoreResult<bool> {
        let path = self.path_for(id);
        match fs::metadata(&path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::from_io(e, &path)),
        }
    }
}

impl std::fmt::Debug for FileRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileRecordStore")
            .field("root", &self.config.root)
            .field("sync_mode", &self.config.sync_mode)
            .finish()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

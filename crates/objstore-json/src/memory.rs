use std::collections::HashMap;
use std::sync::RwLock;

use objstore_types::{Identity, Properties, Record};

use crate::error::{StoreError, StoreResult};
use crate::traits::RecordStore;

/// In-memory, HashMap-based record store.
///
/// Intended for tests and embedding. Mirrors [`FileRecordStore`] semantics
/// (whole-record replacement, `NotFound` on missing identities) without
/// touching the filesystem. Property bags are cloned on read and write.
///
/// [`FileRecordStore`]: crate::FileRecordStore
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<Identity, Properties>>,
}

impl InMemoryRecordStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records from the store.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn put(&self, record: Record) -> StoreResult<Record> {
        let mut map = self.records.write().expect("lock poisoned");
        map.insert(record.id, record.properties.clone());
        Ok(record)
    }

    fn get(&self, id: &Identity) -> StoreResult<Record> {
        let map = self.records.read().expect("lock poisoned");
        map.get(id)
            .map(|properties| Record::with_properties(*id, properties.clone()))
            .ok_or(StoreError::NotFound(*id))
    }

    fn delete(&self, id: &Identity) -> StoreResult<()> {
        let mut map = self.records.write().expect("lock poisoned");
        map.remove(id).map(|_| ()).ok_or(StoreError::NotFound(*id))
    }

    fn exists(&self, id: &Identity) -> StoreResult<bool> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.contains_key(id))
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryRecordStore")
            .field("record_count", &count)
            .finish()
    }
}

use objstore_types::{Identity, Record};

use crate::error::{StoreError, StoreResult};

/// Identity-keyed store of property bags.
///
/// All implementations must satisfy these invariants:
/// - At most one record exists per identity.
/// - `put` replaces the whole record; nothing from a previous put survives.
/// - `get` and `delete` of an absent identity fail with
///   [`StoreError::NotFound`]. After `delete`, both keep failing that way
///   until the identity is put again.
/// - Lookups are by exact identity. There is no enumeration.
pub trait RecordStore: Send + Sync {
    /// Store a record, replacing any existing record with the same identity.
    ///
    /// Returns the record that was passed in.
    fn put(&self, record: Record) -> StoreResult<Record>;

    /// Read the record stored under `id`.
    fn get(&self, id: &Identity) -> StoreResult<Record>;

    /// Remove the record stored under `id`.
    fn delete(&self, id: &Identity) -> StoreResult<()>;

    /// Check whether a record is stored under `id`.
    ///
    /// Default implementation performs a full `get`. Backends may override
    /// with a cheaper check.
    fn exists(&self, id: &Identity) -> StoreResult<bool> {
        match self.get(id) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

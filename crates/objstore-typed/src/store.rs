use std::path::Path;

use objstore_json::{FileRecordStore, RecordStore, StoreConfig};
use objstore_types::{Identity, Record};
use tracing::{debug, warn};

use crate::error::{TypedError, TypedResult};
use crate::marshal::{from_properties, to_properties};
use crate::storable::Storable;

/// Typed façade over a [`RecordStore`].
///
/// `put` stores every serialized field of a value, its id field included,
/// under the value's identity. `get` loads the record, rebuilds the value and
/// checks that the rebuilt identity matches the one requested.
pub struct ObjectStore<S = FileRecordStore> {
    backend: S,
}

impl ObjectStore<FileRecordStore> {
    /// Open a file-backed store rooted at `root`, creating it if missing.
    pub fn open(root: impl AsRef<Path>) -> TypedResult<Self> {
        Ok(Self::with_backend(FileRecordStore::open(root)?))
    }

    /// Open a file-backed store from a full configuration.
    pub fn with_config(config: StoreConfig) -> TypedResult<Self> {
        Ok(Self::with_backend(FileRecordStore::with_config(config)?))
    }
}

impl<S: RecordStore> ObjectStore<S> {
    /// Wrap an existing record store.
    pub fn with_backend(backend: S) -> Self {
        Self { backend }
    }

    /// The underlying record store.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Consume the façade, returning the record store.
    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Store `item` under its identity, replacing whatever was there.
    ///
    /// Returns `item` unchanged; nothing is read back.
    pub fn put<T: Storable>(&self, item: T) -> TypedResult<T> {
        let id = item.id();
        let properties = to_properties(&item)?;
        self.backend.put(Record::with_properties(id, properties))?;
        debug!(id = %id, type_name = std::any::type_name::<T>(), "object stored");
        Ok(item)
    }

    /// Load the value stored under `id`.
    pub fn get<T: Storable>(&self, id: &Identity) -> TypedResult<T> {
        let record = self.backend.get(id)?;
        let item: T = from_properties(record.properties)?;

        let found = item.id();
        if found != *id {
            warn!(requested = %id, found = %found, "record holds a different identity");
            return Err(TypedError::IdentityMismatch {
                requested: *id,
                found,
            });
        }

        debug!(id = %id, type_name = std::any::type_name::<T>(), "object loaded");
        Ok(item)
    }

    /// Remove the value stored under `id`.
    pub fn delete(&self, id: &Identity) -> TypedResult<()> {
        self.backend.delete(id)?;
        Ok(())
    }

    /// Check whether anything is stored under `id`.
    pub fn exists(&self, id: &Identity) -> TypedResult<bool> {
        Ok(self.backend.exists(id)?)
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for ObjectStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectStore")
            .field("backend", &self.backend)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storable::Unique;
    use objstore_json::{InMemoryRecordStore, StoreError};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Book {
        id: Identity,
        author: String,
        title: String,
        isbn: String,
    }

    impl Unique for Book {
        fn id(&self) -> Identity {
            self.id
        }
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Engine {
        cylinders: u8,
        litres: f64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Car {
        id: Identity,
        make: String,
        model: String,
        doors: i32,
        engine: Engine,
    }

    impl Unique for Car {
        fn id(&self) -> Identity {
            self.id
        }
    }

    fn book(id: Identity) -> Book {
        Book {
            id,
            author: "Harper Lee".into(),
            title: "To Kill A Mockingbird".into(),
            isbn: "9781784752637".into(),
        }
    }

    fn car(id: Identity) -> Car {
        Car {
            id,
            make: "Ford".into(),
            model: "Fiesta".into(),
            doors: 3,
            engine: Engine {
                cylinders: 3,
                litres: 1.0,
            },
        }
    }

    fn temp_store() -> (tempfile::TempDir, ObjectStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ObjectStore::open(dir.path().join("StorageLocation")).unwrap();
        (dir, store)
    }

    #[test]
    fn putting_a_book_then_getting_by_id_matches() {
        let (_dir, store) = temp_store();
        let id = Identity::new();
        let stored = store.put(book(id)).unwrap();
        assert_eq!(stored, book(id));

        let retrieved: Book = store.get(&id).unwrap();
        assert_eq!(retrieved, book(id));
    }

    #[test]
    fn putting_a_car_then_getting_by_id_matches() {
        let (_dir, store) = temp_store();
        let id = Identity::new();
        store.put(car(id)).unwrap();
        let retrieved: Car = store.get(&id).unwrap();
        assert_eq!(retrieved, car(id));
    }

    #[test]
    fn overwriting_a_book_with_a_car_returns_the_car() {
        let (_dir, store) = temp_store();
        let id = Identity::new();
        store.put(book(id)).unwrap();
        store.put(car(id)).unwrap();

        let retrieved: Car = store.get(&id).unwrap();
        assert_eq!(retrieved, car(id));
        // Book fields are gone, not merged alongside the car's.
        assert!(matches!(
            store.get::<Book>(&id),
            Err(TypedError::Conversion { .. })
        ));
    }

    #[test]
    fn file_holds_every_field_including_the_id() {
        let (_dir, store) = temp_store();
        let id = Identity::from_u128(0x11111111_1111_1111_1111_111111111111);
        store.put(book(id)).unwrap();

        let path = store.backend().path_for(&id);
        let on_disk: serde_json::Value =
            serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(
            on_disk,
            json!({
                "id": "11111111-1111-1111-1111-111111111111",
                "author": "Harper Lee",
                "title": "To Kill A Mockingbird",
                "isbn": "9781784752637",
            })
        );
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let (_dir, store) = temp_store();
        let err = store.get::<Book>(&Identity::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn deleting_then_getting_is_not_found() {
        let (_dir, store) = temp_store();
        let id = Identity::new();
        store.put(book(id)).unwrap();
        assert!(store.exists(&id).unwrap());

        store.delete(&id).unwrap();
        assert!(!store.exists(&id).unwrap());
        assert!(store.get::<Book>(&id).unwrap_err().is_not_found());
        assert!(store.delete(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn mismatched_identity_is_rejected() {
        let (_dir, store) = temp_store();
        let requested = Identity::new();
        let other = Identity::new();
        let properties = to_properties(&book(other)).unwrap();
        store
            .backend()
            .put(Record::with_properties(requested, properties))
            .unwrap();

        match store.get::<Book>(&requested).unwrap_err() {
            TypedError::IdentityMismatch { requested: r, found } => {
                assert_eq!(r, requested);
                assert_eq!(found, other);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn corrupt_file_surfaces_as_store_error() {
        let (_dir, store) = temp_store();
        let id = Identity::new();
        std::fs::write(store.backend().path_for(&id), b"not json").unwrap();
        assert!(matches!(
            store.get::<Book>(&id),
            Err(TypedError::Store(StoreError::CorruptRecord { .. }))
        ));
    }

    #[test]
    fn works_over_in_memory_backend() {
        let store = ObjectStore::with_backend(InMemoryRecordStore::new());
        let id = Identity::new();
        store.put(car(id)).unwrap();
        assert_eq!(store.get::<Car>(&id).unwrap(), car(id));
        assert_eq!(store.backend().len(), 1);

        let backend = store.into_backend();
        let record = backend.get(&id).unwrap();
        assert_eq!(record.property("doors"), Some(&json!(3)));
        assert_eq!(record.property("engine"), Some(&json!({"cylinders": 3, "litres": 1.0})));
    }

    #[test]
    fn debug_format() {
        let store = ObjectStore::with_backend(InMemoryRecordStore::new());
        let debug = format!("{store:?}");
        assert!(debug.contains("ObjectStore"));
        assert!(debug.contains("InMemoryRecordStore"));
    }
}

//! Typed object store for objstore.
//!
//! Wraps any [`RecordStore`] and converts domain values to and from the
//! record property bag. The persisted field set of a type is whatever its
//! serde derive declares, so it is fixed at compile time.
//!
//! A domain type opts in by deriving `Serialize`/`Deserialize` and
//! implementing [`Unique`]:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Book { id: Identity, title: String }
//!
//! impl Unique for Book {
//!     fn id(&self) -> Identity { self.id }
//! }
//!
//! let store = ObjectStore::open("StorageLocation")?;
//! store.put(book)?;
//! let book: Book = store.get(&id)?;
//! ```
//!
//! # Modules
//!
//! - [`storable`] — The [`Unique`] and [`Storable`] capability traits
//! - [`marshal`] — Conversion between typed values and property bags
//! - [`store`] — The [`ObjectStore`] façade
//! - [`error`] — Error types for typed operations

pub mod error;
pub mod marshal;
pub mod storable;
pub mod store;

pub use error::{TypedError, TypedResult};
pub use marshal::{from_properties, to_properties};
pub use storable::{Storable, Unique};
pub use store::ObjectStore;

// Re-export key types
pub use objstore_json::{FileRecordStore, InMemoryRecordStore, RecordStore, StoreConfig, StoreError};
pub use objstore_types::{Identity, Properties, Record};

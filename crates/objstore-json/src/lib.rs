//! File-per-identity JSON record store for objstore.
//!
//! This crate is the untyped storage layer. A [`Record`] (an identity plus a
//! property bag) is persisted as a single file named after the identity,
//! holding the properties as one JSON object:
//!
//! ```text
//! <root>/11111111-1111-1111-1111-111111111111   {"key":"value"}
//! ```
//!
//! # Storage Backends
//!
//! All backends implement the [`RecordStore`] trait:
//!
//! - [`FileRecordStore`] -- one JSON file per identity under a root directory
//! - [`InMemoryRecordStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Lookups are by exact identity only. There is no listing or indexing.
//! 2. A put replaces the whole record. Properties are never merged.
//! 3. Writes go to a temporary file in the root and are renamed into place,
//!    so readers never observe a half-written record.
//! 4. No locking and no retries. Concurrent puts to one identity race and the
//!    last rename wins.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{StoreConfig, SyncMode};
pub use error::{StoreError, StoreResult};
pub use file::FileRecordStore;
pub use memory::InMemoryRecordStore;
pub use objstore_types::{Identity, Properties, Record};
pub use traits::RecordStore;

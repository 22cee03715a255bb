//! Foundation types for objstore.
//!
//! Every other objstore crate depends on `objstore-types`. It defines the
//! identity primitive and the untyped record that the storage layers move
//! around.
//!
//! # Key Types
//!
//! - [`Identity`] — UUID identifying one stored object; doubles as its file name
//! - [`Properties`] — the property bag: field name to JSON value
//! - [`Record`] — the unit of persistence, an identity plus its properties

pub mod error;
pub mod identity;
pub mod record;

pub use error::TypeError;
pub use identity::Identity;
pub use record::{Properties, Record};

/// Re-exported so callers can build property values without a direct
/// `serde_json` dependency.
pub use serde_json::Value;

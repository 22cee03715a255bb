//! Capability traits for values the typed store can persist.

use objstore_types::Identity;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A value with a stable identity.
///
/// The identity must not change over the value's lifetime; it names the
/// record the value is stored under.
pub trait Unique {
    /// The identity of this value.
    fn id(&self) -> Identity;
}

/// A value that can round-trip through a property bag.
///
/// Blanket-implemented for every [`Unique`] type with serde derives. Each
/// serialized field becomes one property, so the type must serialize as a
/// map (a struct with named fields, or a map type).
pub trait Storable: Unique + Serialize + DeserializeOwned {}

impl<T> Storable for T where T: Unique + Serialize + DeserializeOwned {}

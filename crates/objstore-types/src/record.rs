use serde_json::Value;

use crate::identity::Identity;

/// The property bag: property name to JSON value.
///
/// Values are the tagged union [`serde_json::Value`], so every conversion
/// over them is an exhaustive match. Equality ignores insertion order.
pub type Properties = serde_json::Map<String, Value>;

/// The unit of persistence: an identity plus its property bag.
///
/// The identity is not implicitly part of the properties. It only appears
/// inside a stored file when a caller puts it there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Identity of the record; also its file name.
    pub id: Identity,
    /// Named, dynamically typed properties.
    pub properties: Properties,
}

impl Record {
    /// Create a record with no properties.
    pub fn new(id: Identity) -> Self {
        Self {
            id,
            properties: Properties::new(),
        }
    }

    /// Create a record from an existing property bag.
    pub fn with_properties(id: Identity, properties: Properties) -> Self {
        Self { id, properties }
    }

    /// Builder-style insert of a single property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Look up a property by name.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the record carries no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

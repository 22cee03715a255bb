//! Conversion between typed values and property bags.
//!
//! Both directions go through [`serde_json::Value`], the same encoding the
//! record store writes. Field names are matched exactly and case-sensitively
//! (after any `#[serde(rename)]`). Properties the target type does not
//! declare are ignored unless it opts into `#[serde(deny_unknown_fields)]`.

use std::any::type_name;

use objstore_types::Properties;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{TypedError, TypedResult};

/// Capture every serialized field of `value` as a property.
///
/// Fails with [`TypedError::Conversion`] if the value does not serialize to a
/// JSON object (for example a tuple struct or a bare string).
pub fn to_properties<T: Serialize + ?Sized>(value: &T) -> TypedResult<Properties> {
    let encoded = serde_json::to_value(value).map_err(|e| conversion::<T>(e.to_string()))?;
    match encoded {
        Value::Object(properties) => Ok(properties),
        other => Err(conversion::<T>(format!(
            "expected fields, serialized to {}",
            describe(&other)
        ))),
    }
}

/// Rebuild a `T` from a property bag.
///
/// Missing or mistyped fields fail with [`TypedError::Conversion`]; a
/// partially built value is never returned.
pub fn from_properties<T: DeserializeOwned>(properties: Properties) -> TypedResult<T> {
    serde_json::from_value(Value::Object(properties)).map_err(|e| conversion::<T>(e.to_string()))
}

fn conversion<T: ?Sized>(reason: String) -> TypedError {
    TypedError::Conversion {
        type_name: type_name::<T>(),
        reason,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

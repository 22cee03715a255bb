//! Error types for typed store operations.

use objstore_json::StoreError;
use objstore_types::Identity;
use thiserror::Error;

/// Errors that can occur while storing or loading typed values.
#[derive(Debug, Error)]
pub enum TypedError {
    /// The underlying record store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A value could not be converted to or from a property bag.
    #[error("cannot convert {type_name}: {reason}")]
    Conversion {
        type_name: &'static str,
        reason: String,
    },

    /// The record loaded under one identity describes another.
    #[error("identity mismatch: requested {requested}, record holds {found}")]
    IdentityMismatch { requested: Identity, found: Identity },
}

impl TypedError {
    /// Returns `true` when the underlying record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_not_found())
    }
}

/// Convenience type alias for typed operations.
pub type TypedResult<T> = std::result::Result<T, TypedError>;

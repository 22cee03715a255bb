use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid identity {input:?}: {reason}")]
    InvalidIdentity { input: String, reason: String },
}

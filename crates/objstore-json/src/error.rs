use std::io;
use std::path::{Path, PathBuf};

use objstore_types::Identity;

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record exists for the identity.
    #[error("record not found: {0}")]
    NotFound(Identity),

    /// The filesystem refused the operation, or the root is not usable.
    #[error("access denied: {}: {source}", .path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The stored file is not a JSON object.
    #[error("corrupt record {id}: {reason}")]
    CorruptRecord { id: Identity, reason: String },

    /// The property bag could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StoreError {
    /// Returns `true` for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` for [`StoreError::AccessDenied`].
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }

    /// Classify an I/O error hit while reading or removing `path`.
    pub(crate) fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                Self::access_denied(err, path)
            }
            _ => Self::Io(err),
        }
    }

    /// Classify an I/O error hit while writing `path`.
    ///
    /// Besides permission failures, a root that vanished or is no longer a
    /// directory, a target occupied by a directory, and a read-only
    /// filesystem all mean the store cannot be written.
    pub(crate) fn from_write_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied
            | io::ErrorKind::NotFound
            | io::ErrorKind::NotADirectory
            | io::ErrorKind::IsADirectory
            | io::ErrorKind::ReadOnlyFilesystem => Self::access_denied(err, path),
            _ => Self::Io(err),
        }
    }

    fn access_denied(err: io::Error, path: &Path) -> Self {
        Self::AccessDenied {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

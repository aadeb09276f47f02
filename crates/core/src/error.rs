//! Error types for nestkv
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Two layers:
//! - [`StoreError`]: a failure reported by one container level of the store
//! - [`Error`]: what the path resolver and the facade return; store failures
//!   are wrapped together with the diagnostic path at which they happened

use thiserror::Error;

/// Result type alias for nestkv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a single container level.
///
/// `ContainerNotFound` is signalled distinctly so that callers deleting a
/// container can tell "nothing to delete" apart from a real failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Named container does not exist
    #[error("container not found")]
    ContainerNotFound,

    /// Container name was empty
    #[error("container name required")]
    NameRequired,

    /// Key was empty
    #[error("key required")]
    KeyRequired,

    /// Key exceeds the configured maximum
    #[error("key too large: {actual} bytes exceeds maximum {max}")]
    KeyTooLarge {
        /// Actual key length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Value exceeds the configured maximum
    #[error("value too large: {actual} bytes exceeds maximum {max}")]
    ValueTooLarge {
        /// Actual value length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// The key holds a value where a container was expected, or the reverse
    #[error("incompatible value")]
    IncompatibleValue,

    /// Creating the container would exceed the configured nesting depth
    #[error("nesting depth {max} exceeded")]
    DepthExceeded {
        /// Maximum nesting depth
        max: usize,
    },
}

/// Error type returned by path resolution and the database facade
#[derive(Debug, Error)]
pub enum Error {
    /// Ensure-mode lookup found no container or key at `path`
    #[error("key not found {path:?}")]
    NotFound {
        /// Diagnostic path up to the missing element
        path: String,
    },

    /// Non-overwriting put found the key already present
    #[error("key exists {path:?}")]
    Exists {
        /// Diagnostic path of the existing key
        path: String,
    },

    /// Caller passed too few path elements
    #[error("malformed path: {0}")]
    Malformed(String),

    /// The underlying store failed while operating on `path`
    #[error("container {path}: {source}")]
    Store {
        /// Diagnostic path of the container being operated on
        path: String,
        /// Store failure
        #[source]
        source: StoreError,
    },

    /// Encoded bytes could not be decoded
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Configuration could not be loaded or is invalid
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Build a `NotFound` error for `path`
    pub fn not_found(path: impl Into<String>) -> Self {
        Error::NotFound { path: path.into() }
    }

    /// Build an `Exists` error for `path`
    pub fn exists(path: impl Into<String>) -> Self {
        Error::Exists { path: path.into() }
    }

    /// Build a `Malformed` error for a path with `len` elements where at least `min` are needed
    pub fn insufficient_elements(len: usize, min: usize) -> Self {
        Error::Malformed(format!("insufficient number of elements {} < {}", len, min))
    }

    /// Wrap a store failure with the diagnostic path it happened at
    pub fn store(path: impl Into<String>, source: StoreError) -> Self {
        Error::Store {
            path: path.into(),
            source,
        }
    }

    /// True if this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// True if this is an `Exists` error
    pub fn is_exists(&self) -> bool {
        matches!(self, Error::Exists { .. })
    }

    /// True if this is a `Malformed` error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed(_))
    }

    /// Diagnostic path carried by the error, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::NotFound { path } | Error::Exists { path } | Error::Store { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

/// Errors decoding sortable encodings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Buffer has the wrong length for the encoding
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Provided length
        actual: usize,
    },

    /// Decoded value does not name a representable instant
    #[error("timestamp out of range")]
    OutOfRange,
}

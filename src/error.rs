//! Errors returned by collection operations.

use crate::Key;
use std::fmt;

/// Result type for fallible collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;

/// A failed collection operation.
///
/// All failures are local and synchronous: nothing is retried and the receiver is
/// left untouched.
#[derive(Debug)]
pub enum CollectionError {
    /// The operation needs at least one element (`pop`, `min`, `avg`, `reduce`, ...).
    EmptyCollection {
        /// Name of the operation that failed
        operation: &'static str,
    },
    /// No element is stored under the requested key.
    KeyNotFound {
        /// The key that was requested
        key: Key,
    },
    /// No element satisfied the predicate and no default was supplied.
    NotFound {
        /// Name of the operation that failed
        operation: &'static str,
    },
    /// An element had fewer members than the spread function binds.
    InvalidShape {
        /// Key of the offending element
        key: Key,
        /// Number of members the function binds
        expected: usize,
        /// Number of members the element has
        found: usize,
    },
    /// Two inputs that must line up positionally have different lengths.
    LengthMismatch {
        /// Required length
        expected: usize,
        /// Actual length
        found: usize,
    },
    /// A derived value cannot be used as a collection key.
    InvalidKey {
        /// Human-readable reason
        reason: String,
    },
    /// JSON encoding or decoding failed.
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
}

impl CollectionError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        tracing::debug!(operation, error = "empty collection", "collection operation failed");
        Self::EmptyCollection { operation }
    }

    pub(crate) fn not_found(operation: &'static str) -> Self {
        tracing::debug!(operation, error = "no match", "collection operation failed");
        Self::NotFound { operation }
    }

    pub(crate) fn key_not_found(key: Key) -> Self {
        tracing::debug!(%key, error = "key not found", "collection operation failed");
        Self::KeyNotFound { key }
    }

    pub(crate) fn invalid_shape(key: Key, expected: usize, found: usize) -> Self {
        tracing::debug!(%key, expected, found, error = "element too short", "collection operation failed");
        Self::InvalidShape {
            key,
            expected,
            found,
        }
    }

    pub(crate) fn length_mismatch(expected: usize, found: usize) -> Self {
        tracing::debug!(expected, found, error = "length mismatch", "collection operation failed");
        Self::LengthMismatch { expected, found }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection { operation } => {
                write!(f, "{operation} called on an empty collection")
            }
            Self::KeyNotFound { key } => write!(f, "key [{key}] not found in collection"),
            Self::NotFound { operation } => {
                write!(f, "{operation}: no element matched and no default was given")
            }
            Self::InvalidShape {
                key,
                expected,
                found,
            } => write!(
                f,
                "element [{key}] has {found} member(s), but {expected} are required"
            ),
            Self::LengthMismatch { expected, found } => write!(
                f,
                "length mismatch: expected {expected} element(s), found {found}"
            ),
            Self::InvalidKey { reason } => write!(f, "invalid collection key: {reason}"),
            #[cfg(feature = "serde")]
            Self::Json(e) => write!(f, "json conversion failed: {e}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for CollectionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

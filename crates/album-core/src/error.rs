//! Store error taxonomy
//!
//! Messages name the operation and its input. The backend cause is kept
//! as the error source, not repeated in the message.

use crate::types::AlbumId;
use thiserror::Error;

/// Underlying cause reported by a store backend
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The initial handshake failed. Fatal for the driver.
    #[error("Unable to connect to database {target}")]
    Connection {
        target: String,
        #[source]
        source: BoxError,
    },

    /// A round trip failed, or a row did not decode into an album
    #[error("{op} {input}")]
    Query {
        op: &'static str,
        input: String,
        #[source]
        source: BoxError,
    },

    /// A single-row lookup matched nothing
    #[error("album_by_id {id}: no such album")]
    NotFound { id: AlbumId },

    #[error("{op}")]
    Write {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    pub fn connection(target: impl Into<String>, source: impl Into<BoxError>) -> Self {
        StoreError::Connection {
            target: target.into(),
            source: source.into(),
        }
    }

    /// Wrap a failure with the operation name and its input value.
    /// String inputs are quoted so an empty filter stays visible.
    pub fn query(op: &'static str, input: impl std::fmt::Debug, source: impl Into<BoxError>) -> Self {
        StoreError::Query {
            op,
            input: format!("{:?}", input),
            source: source.into(),
        }
    }

    pub fn write(op: &'static str, source: impl Into<BoxError>) -> Self {
        StoreError::Write {
            op,
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

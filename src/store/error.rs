//! Error types for the remote stores.

use thiserror::Error;

/// Errors reported by a [`DataStore`](super::DataStore) or an
/// [`ObjectStore`](super::ObjectStore).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The request never got a usable answer (network, timeout, closed connection).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The store answered and refused the request.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

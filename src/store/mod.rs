//! Contracts of the remote data store and object store, plus in-memory and mock implementations.

mod error;
mod traits;

pub mod memory;
pub mod mock;

pub use error::StoreError;
pub use traits::{DataStore, ObjectStore};

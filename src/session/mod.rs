//! # Editor Session
//!
//! One actor task per open editor page. The [`EditorActor`] owns the form and
//! runs UI events and both sequences one at a time; the [`EditorClient`] is the
//! cloneable handle that sends them.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod snapshot;

pub use actor::EditorActor;
pub use client::EditorClient;
pub use error::SessionError;
pub use message::{EditorRequest, FieldEdit};
pub use snapshot::EditorSnapshot;

//! # Session Errors
//!
//! Failures seen by callers of [`EditorClient`](super::EditorClient). Mailbox
//! failures mirror the two ways a request can get lost: the session task is
//! gone before the request is queued, or it drops the reply.

use crate::sequencer::SubmitError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Editor session closed")]
    Closed,

    #[error("Editor session dropped response channel")]
    Dropped,

    #[error("Editor session task failed: {0}")]
    TaskFailed(String),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl SessionError {
    /// The submit error, if the request reached the submit sequencer.
    pub fn as_submit(&self) -> Option<&SubmitError> {
        match self {
            SessionError::Submit(e) => Some(e),
            _ => None,
        }
    }
}

//! Error types for the load and submit sequences.

use crate::editor::ValidationError;
use crate::store::StoreError;
use thiserror::Error;

/// Why a submission stopped.
///
/// Variants after `Validation` are write errors: the remote sequence was
/// started and aborted at the named step. Earlier steps stay committed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Step 1. Nothing was written.
    #[error("Product update failed: {0}")]
    Update(#[source] StoreError),

    /// Step 2. The record is already updated; image rows are untouched.
    #[error("Image upload incomplete: {uploaded} of {expected} files uploaded")]
    UploadCountMismatch { expected: usize, uploaded: usize },

    /// Step 3. Uploaded objects are left without rows.
    #[error("Deleting previous image rows failed: {0}")]
    DeleteImages(#[source] StoreError),

    /// Step 4. The product has no image rows until the next submission.
    #[error("Inserting image rows failed: {0}")]
    InsertImages(#[source] StoreError),
}

impl SubmitError {
    pub fn is_write_error(&self) -> bool {
        !matches!(self, SubmitError::Validation(_))
    }

    /// Text for the blocking prompt shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(e) => e.user_message(),
            SubmitError::UploadCountMismatch { .. } => {
                "Some photos could not be uploaded. Please try saving again.".to_string()
            }
            other => format!("Saving the listing failed: {other}. Please try again."),
        }
    }
}

//! The two ordered async sequences of the editor: loading the listing and submitting it.

pub mod error;
pub mod load;
pub mod submit;

pub use error::SubmitError;
pub use load::{FetchStatus, LoadReport, LoadSequencer};
pub use submit::{upload_path, SubmitOutcome, SubmitSequencer, CONFIRM_MESSAGE};

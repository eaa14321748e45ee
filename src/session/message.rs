//! # Session Messages
//!
//! One variant per UI event the page can raise, plus the two sequences. Every
//! request carries its own reply channel, so the caller awaits exactly the
//! outcome of its own event.

use super::error::SessionError;
use super::snapshot::EditorSnapshot;
use crate::model::{Category, LocalFile, MapEvent};
use crate::sequencer::{LoadReport, SubmitOutcome};
use tokio::sync::oneshot;

/// Reply channel of a single request.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

/// A change to one scalar input of the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Title(String),
    Category(Option<Category>),
    Price(String),
    Description(String),
}

#[derive(Debug)]
pub enum EditorRequest {
    /// Runs the load sequence. Only the first one per session does any work.
    Load { respond_to: Response<LoadReport> },
    Edit {
        edit: FieldEdit,
        respond_to: Response<()>,
    },
    AttachFiles {
        files: Vec<LocalFile>,
        respond_to: Response<usize>,
    },
    RemoveImage {
        index: usize,
        respond_to: Response<bool>,
    },
    Advance { respond_to: Response<bool> },
    Retreat { respond_to: Response<bool> },
    MapEvent {
        event: MapEvent,
        respond_to: Response<()>,
    },
    Snapshot { respond_to: Response<EditorSnapshot> },
    Submit { respond_to: Response<SubmitOutcome> },
    /// The user navigated away; all local state is discarded.
    Leave { respond_to: Response<()> },
    /// Discards local state and stops the session, whatever clients remain.
    Close { respond_to: Response<()> },
}

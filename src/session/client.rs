//! # Editor Client
//!
//! The handle the page holds. Each method turns one UI event into an
//! [`EditorRequest`], sends it to the session and waits for the reply.
//! Cloning is cheap; every clone feeds the same mailbox.

use std::path::Path;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use super::error::SessionError;
use super::message::{EditorRequest, FieldEdit, Response};
use super::snapshot::EditorSnapshot;
use crate::model::{Category, LocalFile, MapEvent};
use crate::sequencer::{LoadReport, SubmitOutcome};

#[derive(Clone)]
pub struct EditorClient {
    sender: mpsc::Sender<EditorRequest>,
}

impl EditorClient {
    pub fn new(sender: mpsc::Sender<EditorRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(&self, make: impl FnOnce(Response<T>) -> EditorRequest) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<LoadReport, SessionError> {
        self.request(|respond_to| EditorRequest::Load { respond_to }).await
    }

    pub async fn edit(&self, edit: FieldEdit) -> Result<(), SessionError> {
        self.request(|respond_to| EditorRequest::Edit { edit, respond_to })
            .await
    }

    pub async fn set_title(&self, title: impl Into<String>) -> Result<(), SessionError> {
        self.edit(FieldEdit::Title(title.into())).await
    }

    pub async fn set_category(&self, category: Option<Category>) -> Result<(), SessionError> {
        self.edit(FieldEdit::Category(category)).await
    }

    pub async fn set_price(&self, price: impl Into<String>) -> Result<(), SessionError> {
        self.edit(FieldEdit::Price(price.into())).await
    }

    pub async fn set_description(&self, description: impl Into<String>) -> Result<(), SessionError> {
        self.edit(FieldEdit::Description(description.into())).await
    }

    /// Appends already-read files as pending images. Returns how many were added.
    #[instrument(skip_all, fields(count = files.len()))]
    pub async fn attach_files(&self, files: Vec<LocalFile>) -> Result<usize, SessionError> {
        self.request(|respond_to| EditorRequest::AttachFiles { files, respond_to })
            .await
    }

    /// Reads the files from disk, then attaches them in the given order.
    ///
    /// Reading happens before anything is sent, so a missing file attaches
    /// nothing.
    #[instrument(skip_all)]
    pub async fn attach_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<usize, SessionError> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let file = LocalFile::read(path)
                .await
                .map_err(|source| SessionError::ReadFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            debug!(name = %file.name, bytes = file.len(), "File read");
            files.push(file);
        }
        self.attach_files(files).await
    }

    /// Removes the image at `index`. `false` if the index was out of range.
    #[instrument(skip(self))]
    pub async fn remove_image(&self, index: usize) -> Result<bool, SessionError> {
        self.request(|respond_to| EditorRequest::RemoveImage { index, respond_to })
            .await
    }

    pub async fn advance(&self) -> Result<bool, SessionError> {
        self.request(|respond_to| EditorRequest::Advance { respond_to }).await
    }

    pub async fn retreat(&self) -> Result<bool, SessionError> {
        self.request(|respond_to| EditorRequest::Retreat { respond_to }).await
    }

    /// Forwards a marker move from the map.
    pub async fn map_event(&self, event: MapEvent) -> Result<(), SessionError> {
        self.request(|respond_to| EditorRequest::MapEvent { event, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<EditorSnapshot, SessionError> {
        self.request(|respond_to| EditorRequest::Snapshot { respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<SubmitOutcome, SessionError> {
        debug!("Sending submit to session");
        self.request(|respond_to| EditorRequest::Submit { respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn leave(&self) -> Result<(), SessionError> {
        self.request(|respond_to| EditorRequest::Leave { respond_to }).await
    }

    /// Stops the session for every clone of this client.
    #[instrument(skip(self))]
    pub async fn close(&self) -> Result<(), SessionError> {
        self.request(|respond_to| EditorRequest::Close { respond_to }).await
    }
}

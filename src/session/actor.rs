//! # Editor Session Actor
//!
//! The server half of one edit session. It exclusively owns the
//! [`ProductFormState`] and processes every [`EditorRequest`] to completion
//! before taking the next one, including the awaits of the load and submit
//! sequences. UI events that arrive during a submission simply queue in the
//! mailbox, so the form is never observed half-written and needs no lock.
//!
//! Stores and dialogs arrive through `run(ctx)`, not through `new`, which
//! keeps construction free of I/O:
//!
//! ```rust,ignore
//! let (actor, client) = EditorActor::new(32, ProductId::from("42"), ctx.previews.clone());
//! tokio::spawn(actor.run(ctx));
//! let report = client.load().await?;
//! ```
//!
//! The loop ends on a `Close` request or when every [`EditorClient`] is
//! dropped. Remaining local state is discarded at that point, and later
//! requests from surviving clones fail with `SessionError::Closed`.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::client::EditorClient;
use super::error::SessionError;
use super::message::{EditorRequest, FieldEdit};
use super::snapshot::EditorSnapshot;
use crate::collaborators::EditorContext;
use crate::editor::{PreviewRegistry, ProductFormState, ValidationError};
use crate::model::ProductId;
use crate::sequencer::{LoadReport, LoadSequencer, SubmitError, SubmitOutcome, SubmitSequencer};

pub struct EditorActor {
    receiver: mpsc::Receiver<EditorRequest>,
    product_id: ProductId,
    form: ProductFormState,
    load_report: Option<LoadReport>,
}

impl EditorActor {
    /// Creates the actor and the client that feeds its mailbox.
    ///
    /// `buffer_size` is the mailbox capacity; senders wait once it is full.
    /// Previews of attached files are issued by `previews`.
    pub fn new(buffer_size: usize, product_id: ProductId, previews: PreviewRegistry) -> (Self, EditorClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            product_id,
            form: ProductFormState::new(previews),
            load_report: None,
        };
        (actor, EditorClient::new(sender))
    }

    pub async fn run(mut self, ctx: EditorContext) {
        let product_id = self.product_id.clone();
        info!(%product_id, "Session started");

        let loader = LoadSequencer::new(product_id.clone());
        let submitter = SubmitSequencer::new(product_id.clone());

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                EditorRequest::Load { respond_to } => {
                    let report = match &self.load_report {
                        Some(report) => {
                            debug!(%product_id, "Load already done");
                            report.clone()
                        }
                        None => {
                            let report = loader.run(&ctx, &mut self.form).await;
                            info!(%product_id, complete = report.is_complete(), images = self.form.images.len(), "Loaded");
                            self.load_report = Some(report.clone());
                            report
                        }
                    };
                    let _ = respond_to.send(Ok(report));
                }
                EditorRequest::Edit { edit, respond_to } => {
                    debug!(%product_id, ?edit, "Edit");
                    self.apply(edit);
                    let _ = respond_to.send(Ok(()));
                }
                EditorRequest::AttachFiles { files, respond_to } => {
                    let added = self.form.images.attach(files);
                    info!(%product_id, added, total = self.form.images.len(), "Files attached");
                    let _ = respond_to.send(Ok(added));
                }
                EditorRequest::RemoveImage { index, respond_to } => {
                    let removed = self.form.images.remove_at(index).is_some();
                    let _ = respond_to.send(Ok(removed));
                }
                EditorRequest::Advance { respond_to } => {
                    let moved = self.form.images.advance();
                    debug!(%product_id, moved, offset = self.form.images.window().offset(), "Advance");
                    let _ = respond_to.send(Ok(moved));
                }
                EditorRequest::Retreat { respond_to } => {
                    let moved = self.form.images.retreat();
                    debug!(%product_id, moved, offset = self.form.images.window().offset(), "Retreat");
                    let _ = respond_to.send(Ok(moved));
                }
                EditorRequest::MapEvent { event, respond_to } => {
                    debug!(%product_id, ?event, "Map event");
                    self.form.geolocation.set_from_map_event(event);
                    let _ = respond_to.send(Ok(()));
                }
                EditorRequest::Snapshot { respond_to } => {
                    let snapshot = EditorSnapshot::capture(&self.form, self.load_report.as_ref());
                    let _ = respond_to.send(Ok(snapshot));
                }
                EditorRequest::Submit { respond_to } => {
                    let result = self.submit(&ctx, &submitter).await;
                    match &result {
                        Ok(outcome) => info!(%product_id, ?outcome, "Submit finished"),
                        Err(e) => warn!(%product_id, error = %e, "Submit failed"),
                    }
                    let _ = respond_to.send(result);
                }
                EditorRequest::Leave { respond_to } => {
                    self.form.reset();
                    info!(%product_id, "Local state discarded");
                    let _ = respond_to.send(Ok(()));
                }
                EditorRequest::Close { respond_to } => {
                    self.form.reset();
                    let _ = respond_to.send(Ok(()));
                    break;
                }
            }
        }

        self.form.reset();
        info!(%product_id, "Shutdown");
    }

    fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Title(title) => self.form.title = title,
            FieldEdit::Category(category) => self.form.category = category,
            FieldEdit::Price(price) => self.form.price = price,
            FieldEdit::Description(description) => self.form.description = description,
        }
    }

    async fn submit(
        &mut self,
        ctx: &EditorContext,
        submitter: &SubmitSequencer,
    ) -> Result<SubmitOutcome, SessionError> {
        let load_failed = matches!(&self.load_report, Some(report) if !report.is_complete());
        if ctx.config.block_submit_after_failed_load && load_failed {
            let e = ValidationError::LoadIncomplete;
            ctx.prompt.alert(&e.user_message());
            return Err(SubmitError::from(e).into());
        }
        Ok(submitter.submit(ctx, &mut self.form).await?)
    }
}

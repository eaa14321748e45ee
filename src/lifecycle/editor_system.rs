use tracing::{error, info, instrument};

use crate::collaborators::EditorContext;
use crate::model::ProductId;
use crate::sequencer::LoadReport;
use crate::session::{EditorActor, EditorClient, SessionError};

/// One mounted editor page.
///
/// `EditorSystem` is responsible for:
/// - **Activation**: spawning the session actor with its context injected
/// - **Initial load**: running the load sequence once, before any UI event
/// - **Teardown**: discarding local state and stopping the actor
///
/// # Example
///
/// ```ignore
/// let system = EditorSystem::activate(product_id, ctx).await?;
///
/// system.client.attach_paths(&["cover.jpg"]).await?;
/// system.client.submit().await?;
///
/// system.shutdown().await?;
/// ```
pub struct EditorSystem {
    /// Handle for sending UI events to the session
    pub client: EditorClient,

    /// What the initial load fetched
    pub load_report: LoadReport,

    handle: tokio::task::JoinHandle<()>,
}

impl EditorSystem {
    /// Starts a session for `product_id` and loads the listing.
    ///
    /// A failed fetch does not fail activation; it is recorded in
    /// [`load_report`](Self::load_report) and the form stays editable.
    #[instrument(skip(ctx))]
    pub async fn activate(product_id: ProductId, ctx: EditorContext) -> Result<Self, SessionError> {
        let (actor, client) =
            EditorActor::new(ctx.config.mailbox_capacity, product_id, ctx.previews.clone());
        let handle = tokio::spawn(actor.run(ctx));

        let load_report = client.load().await?;
        info!(complete = load_report.is_complete(), "Editor activated");

        Ok(Self {
            client,
            load_report,
            handle,
        })
    }

    /// Discards local state, stops the session and waits for its task.
    ///
    /// Clones of the client handed out earlier do not keep the session
    /// running; their later requests fail with [`SessionError::Closed`].
    pub async fn shutdown(self) -> Result<(), SessionError> {
        info!("Shutting down editor...");

        self.client.close().await?;
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Session task failed");
            return Err(SessionError::TaskFailed(e.to_string()));
        }

        info!("Editor shutdown complete.");
        Ok(())
    }
}

//! # Submit Sequencer
//!
//! Turns the edited form into remote writes. Validation and the confirmation
//! dialog run first and never touch the network. After the user confirms, four
//! steps run strictly in order:
//!
//! 1. update the product record
//! 2. upload every pending image (concurrently, joined as one unit)
//! 3. delete all image rows of the product
//! 4. insert one row per image, in display order
//!
//! The store offers no transaction across these calls. A failure aborts the
//! remaining steps and leaves whatever earlier steps wrote in place:
//!
//! | Fails at | Left behind |
//! |----------|-------------|
//! | 1 | nothing |
//! | 2 | updated record, old image rows |
//! | 3 | updated record, old image rows, orphaned uploads |
//! | 4 | updated record, no image rows, orphaned uploads |
//!
//! Persisted images are never re-uploaded. Their existing URL goes straight
//! into step 4 next to the URLs obtained in step 2.
//!
//! The form is only modified on full success, where it is reset and the
//! navigator is sent to the landing route. On any error the user sees an alert
//! and can resubmit without re-entering anything.

use chrono::Utc;
use futures::future::join_all;
use tracing::{debug, error, info, instrument, warn};

use super::error::SubmitError;
use crate::collaborators::EditorContext;
use crate::editor::{ProductFormState, ValidatedSubmission};
use crate::model::{ImageFilter, ImageRef, PendingImage, ProductId, ProductImageRow};
use crate::store::StoreError;

pub const CONFIRM_MESSAGE: &str = "Save your changes to this listing?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every step succeeded; the form was reset.
    Completed,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SubmitSequencer {
    product_id: ProductId,
}

impl SubmitSequencer {
    pub fn new(product_id: ProductId) -> Self {
        Self { product_id }
    }

    #[instrument(skip_all, fields(product_id = %self.product_id))]
    pub async fn submit(
        &self,
        ctx: &EditorContext,
        form: &mut ProductFormState,
    ) -> Result<SubmitOutcome, SubmitError> {
        let submission = match form.validate() {
            Ok(submission) => submission,
            Err(e) => {
                warn!(error = %e, "Submission rejected");
                ctx.prompt.alert(&e.user_message());
                return Err(e.into());
            }
        };
        debug!(patch = ?submission.patch, images = submission.images.len(), "submit called");

        if !ctx.prompt.confirm(CONFIRM_MESSAGE) {
            info!("Submission cancelled");
            return Ok(SubmitOutcome::Cancelled);
        }

        if let Err(e) = self.write(ctx, submission).await {
            error!(error = %e, "Submission aborted");
            ctx.prompt.alert(&e.user_message());
            return Err(e);
        }

        form.reset();
        ctx.navigator.navigate(&ctx.config.landing_route);
        info!("Submission complete");
        Ok(SubmitOutcome::Completed)
    }

    /// Runs the four remote steps for an already validated submission.
    pub async fn write(&self, ctx: &EditorContext, submission: ValidatedSubmission) -> Result<(), SubmitError> {
        let ValidatedSubmission { patch, images } = submission;

        ctx.data
            .update_product(&self.product_id, patch)
            .await
            .map_err(SubmitError::Update)?;
        info!("Product record updated");

        let uploaded = self.upload_pending(ctx, &images).await?;
        info!(count = uploaded.len(), "Images uploaded");

        let filter = ImageFilter::ByProduct(self.product_id.clone());
        ctx.data
            .delete_images(&filter)
            .await
            .map_err(SubmitError::DeleteImages)?;
        debug!("Previous image rows deleted");

        let rows = image_rows(&self.product_id, &images, uploaded);
        let count = rows.len();
        ctx.data
            .insert_images(rows)
            .await
            .map_err(SubmitError::InsertImages)?;
        info!(count, "Image rows saved");

        Ok(())
    }

    async fn upload_pending(&self, ctx: &EditorContext, images: &[ImageRef]) -> Result<Vec<String>, SubmitError> {
        let pending: Vec<&PendingImage> = images.iter().filter_map(ImageRef::as_pending).collect();
        let expected = pending.len();

        let results = join_all(pending.into_iter().map(|image| upload_one(ctx, image))).await;

        let urls: Vec<String> = results
            .into_iter()
            .filter_map(|result| match result {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!(error = %e, "Upload failed");
                    None
                }
            })
            .collect();

        if urls.len() != expected {
            return Err(SubmitError::UploadCountMismatch {
                expected,
                uploaded: urls.len(),
            });
        }
        Ok(urls)
    }
}

async fn upload_one(ctx: &EditorContext, image: &PendingImage) -> Result<String, StoreError> {
    let bucket = &ctx.config.bucket;
    let path = upload_path(&ctx.config.upload_folder);
    ctx.objects
        .upload(bucket, &path, image.file().bytes.clone())
        .await?;
    let url = ctx.objects.public_url(bucket, &path);
    debug!(name = %image.file().name, %path, %url, "Uploaded");
    Ok(url)
}

/// `<folder>/<uuid>_<unix millis>`; unique per call.
pub fn upload_path(folder: &str) -> String {
    format!(
        "{folder}/{}_{}",
        uuid::Uuid::new_v4(),
        Utc::now().timestamp_millis()
    )
}

/// Rows for every image in display order. `uploaded` must hold one URL per
/// pending image, in the same order.
fn image_rows(product_id: &ProductId, images: &[ImageRef], uploaded: Vec<String>) -> Vec<ProductImageRow> {
    let mut fresh = uploaded.into_iter();
    images
        .iter()
        .filter_map(|image| match image {
            ImageRef::Persisted { url } => Some(url.clone()),
            ImageRef::Pending(_) => fresh.next(),
        })
        .map(|url| ProductImageRow::new(product_id.clone(), url))
        .collect()
}

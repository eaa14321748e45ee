//! # Load Sequencer
//!
//! Populates the form from the remote store when the editor is activated:
//!
//! 1. fetch the product record by id
//! 2. copy it into the scalar fields and the marker
//! 3. fetch the product's image rows
//! 4. append them as persisted images, in store order
//!
//! A failed step is logged and the next one still runs. Nothing is retried,
//! so a failed load leaves the form partly or fully empty and still editable.

use crate::collaborators::EditorContext;
use crate::editor::ProductFormState;
use crate::model::{ImageFilter, ImageRef, ProductId};
use crate::store::StoreError;
use tracing::{error, info, instrument, warn};

/// Outcome of one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Loaded,
    NotFound,
    Failed(StoreError),
}

impl FetchStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchStatus::Loaded)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub record: FetchStatus,
    pub images: FetchStatus,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.record.is_loaded() && self.images.is_loaded()
    }
}

#[derive(Debug, Clone)]
pub struct LoadSequencer {
    product_id: ProductId,
}

impl LoadSequencer {
    pub fn new(product_id: ProductId) -> Self {
        Self { product_id }
    }

    #[instrument(skip_all, fields(product_id = %self.product_id))]
    pub async fn run(&self, ctx: &EditorContext, form: &mut ProductFormState) -> LoadReport {
        let record = match ctx.data.get_product(&self.product_id).await {
            Ok(Some(record)) => {
                form.apply_record(&record);
                info!("Product record loaded");
                FetchStatus::Loaded
            }
            Ok(None) => {
                warn!("Product record not found");
                FetchStatus::NotFound
            }
            Err(e) => {
                error!(error = %e, "Failed to load product record");
                FetchStatus::Failed(e)
            }
        };

        let filter = ImageFilter::ByProduct(self.product_id.clone());
        let images = match ctx.data.list_images(&filter).await {
            Ok(rows) => {
                let count = rows.len();
                form.images
                    .append(rows.into_iter().map(|row| ImageRef::persisted(row.image_url)));
                info!(count, "Product images loaded");
                FetchStatus::Loaded
            }
            Err(e) => {
                error!(error = %e, "Failed to load product images");
                FetchStatus::Failed(e)
            }
        };

        LoadReport { record, images }
    }
}

//! # Listing Editor Demo
//!
//! Runs one edit session end to end against the in-memory stores:
//! 1.  Seeds a listing with two stored photos.
//! 2.  Opens the editor through [`EditorSystem`].
//! 3.  Edits the price, moves the marker, swaps a photo.
//! 4.  Submits and prints what the stores now hold.
//!
//! Set `LISTING_EDITOR_CONFIG` to a TOML file to override the defaults.

use std::sync::Arc;

use listing_editor::collaborators::{EditorContext, RecordingNavigator, ScriptedPrompt};
use listing_editor::lifecycle::{setup_tracing, EditorConfig, EditorSystem};
use listing_editor::model::{LocalFile, MapEvent, ProductId, ProductImageRow, ProductRecord};
use listing_editor::store::memory::{MemoryDataStore, MemoryObjectStore};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = match std::env::var("LISTING_EDITOR_CONFIG") {
        Ok(path) => EditorConfig::from_file(&path).await.map_err(|e| e.to_string())?,
        Err(_) => EditorConfig::default(),
    };
    info!(?config, "Starting listing editor demo");

    let product_id = ProductId::from("42");
    let data = MemoryDataStore::new();
    data.seed_product(ProductRecord {
        id: product_id.clone(),
        title: "Book".to_string(),
        category: "소설/시/희곡".to_string(),
        price: 9000.0,
        description: "Read once, no markings.".to_string(),
        latitude: 37.5665,
        longitude: 126.978,
        address: "Seoul".to_string(),
    });
    data.seed_images([
        ProductImageRow::new(product_id.clone(), "https://cdn.example/42/front.jpg"),
        ProductImageRow::new(product_id.clone(), "https://cdn.example/42/back.jpg"),
    ]);
    let objects = MemoryObjectStore::new("https://storage.example");

    let ctx = EditorContext::new(
        Arc::new(data.clone()),
        Arc::new(objects.clone()),
        Arc::new(ScriptedPrompt::accepting()),
        Arc::new(RecordingNavigator::new()),
    )
    .with_config(config);

    let system = EditorSystem::activate(product_id.clone(), ctx)
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("editing");
    async {
        let client = &system.client;
        client.set_price("10000").await?;
        client
            .map_event(MapEvent::new(37.5796, 126.977, "Jongno-gu, Seoul"))
            .await?;
        client.remove_image(1).await?;
        client
            .attach_files(vec![LocalFile::new("spine.jpg", b"demo image bytes".to_vec())])
            .await?;
        let snapshot = client.snapshot().await?;
        info!(images = snapshot.image_count, pending = snapshot.pending_count, "Ready to submit");
        Ok::<_, listing_editor::session::SessionError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("submit");
    match system.client.submit().instrument(span).await {
        Ok(outcome) => info!(?outcome, "Submission finished"),
        Err(e) => error!(error = %e, "Submission failed"),
    }

    if let Some(record) = data.product(&product_id) {
        info!(price = record.price, address = %record.address, "Stored record");
    }
    info!(
        urls = ?data.image_urls(&product_id),
        objects = objects.object_count(),
        "Stored images"
    );

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}

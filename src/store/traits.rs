use async_trait::async_trait;
use std::sync::Arc;

use super::error::StoreError;
use crate::model::{ImageFilter, ProductId, ProductImageRow, ProductPatch, ProductRecord};

/// Remote table store holding `products` and `product_images`.
///
/// The editor receives an implementation at construction time instead of
/// reaching for a process-wide client, so tests can swap in
/// [`MockDataStore`](super::mock::MockDataStore).
#[async_trait]
pub trait DataStore: Send + Sync {
    /// `getById(products, id)`; `Ok(None)` when no such row exists.
    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductRecord>, StoreError>;

    /// `update(products, id, fields)`.
    async fn update_product(&self, id: &ProductId, patch: ProductPatch) -> Result<(), StoreError>;

    /// `listWhere(product_images, filter)`, in store order.
    async fn list_images(&self, filter: &ImageFilter) -> Result<Vec<ProductImageRow>, StoreError>;

    /// `delete(product_images, filter)`.
    async fn delete_images(&self, filter: &ImageFilter) -> Result<(), StoreError>;

    /// `insert(product_images, rows)`.
    async fn insert_images(&self, rows: Vec<ProductImageRow>) -> Result<(), StoreError>;
}

/// Remote blob storage with publicly readable objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, bucket: &str, path: &str, blob: Arc<[u8]>) -> Result<(), StoreError>;

    /// Public URL of an uploaded object. Always resolvable after a successful upload.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}

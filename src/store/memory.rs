//! # In-Memory Stores
//!
//! Process-local implementations of [`DataStore`] and [`ObjectStore`] used by
//! the demo binary and the end-to-end tests. They keep the same observable
//! behaviour as the remote services (store order for image rows, upsert-free
//! inserts, public URLs derived from bucket and path), nothing more.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use super::error::StoreError;
use super::traits::{DataStore, ObjectStore};
use crate::model::{ImageFilter, ProductId, ProductImageRow, ProductPatch, ProductRecord};

#[derive(Debug, Default)]
struct Tables {
    products: HashMap<ProductId, ProductRecord>,
    product_images: Vec<ProductImageRow>,
}

/// Shared in-memory `products` / `product_images` tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts or replaces a product row.
    pub fn seed_product(&self, record: ProductRecord) {
        self.tables().products.insert(record.id.clone(), record);
    }

    pub fn seed_images(&self, rows: impl IntoIterator<Item = ProductImageRow>) {
        self.tables().product_images.extend(rows);
    }

    pub fn product(&self, id: &ProductId) -> Option<ProductRecord> {
        self.tables().products.get(id).cloned()
    }

    pub fn image_urls(&self, id: &ProductId) -> Vec<String> {
        let filter = ImageFilter::ByProduct(id.clone());
        self.tables()
            .product_images
            .iter()
            .filter(|row| filter.matches(row))
            .map(|row| row.image_url.clone())
            .collect()
    }
}

#[async_trait]
impl DataStore for MemoryDataStore {
    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductRecord>, StoreError> {
        let found = self.tables().products.get(id).cloned();
        debug!(%id, found = found.is_some(), "get_product");
        Ok(found)
    }

    async fn update_product(&self, id: &ProductId, patch: ProductPatch) -> Result<(), StoreError> {
        let mut tables = self.tables();
        let record = tables
            .products
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.apply(patch);
        debug!(%id, "update_product");
        Ok(())
    }

    async fn list_images(&self, filter: &ImageFilter) -> Result<Vec<ProductImageRow>, StoreError> {
        let rows: Vec<_> = self
            .tables()
            .product_images
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        debug!(?filter, count = rows.len(), "list_images");
        Ok(rows)
    }

    async fn delete_images(&self, filter: &ImageFilter) -> Result<(), StoreError> {
        let mut tables = self.tables();
        let before = tables.product_images.len();
        tables.product_images.retain(|row| !filter.matches(row));
        debug!(?filter, deleted = before - tables.product_images.len(), "delete_images");
        Ok(())
    }

    async fn insert_images(&self, rows: Vec<ProductImageRow>) -> Result<(), StoreError> {
        debug!(count = rows.len(), "insert_images");
        self.tables().product_images.extend(rows);
        Ok(())
    }
}

/// In-memory bucket storage serving objects under `base_url`.
#[derive(Debug, Clone)]
pub struct MemoryObjectStore {
    base_url: String,
    objects: Arc<Mutex<HashMap<String, Arc<[u8]>>>>,
}

impl MemoryObjectStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: Arc::default(),
        }
    }

    fn objects(&self) -> MutexGuard<'_, HashMap<String, Arc<[u8]>>> {
        self.objects.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn object(&self, bucket: &str, path: &str) -> Option<Arc<[u8]>> {
        self.objects().get(&format!("{bucket}/{path}")).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects().len()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(&self, bucket: &str, path: &str, blob: Arc<[u8]>) -> Result<(), StoreError> {
        let key = format!("{bucket}/{path}");
        let mut objects = self.objects();
        if objects.contains_key(&key) {
            return Err(StoreError::Rejected(format!("object already exists: {key}")));
        }
        debug!(%key, bytes = blob.len(), "upload");
        objects.insert(key, blob);
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.base_url)
    }
}

//! Image references held by the listing form and the rows they map to.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;

use super::ProductId;

/// A file picked by the user, read fully into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk.
    pub async fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Transient URL under which a pending blob is displayed before upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewUrl(pub(crate) String);

impl PreviewUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PreviewUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A local file waiting to be uploaded, together with its preview.
///
/// Only [`PreviewRegistry`](crate::editor::PreviewRegistry) hands these out, so
/// every pending image has a live preview until the image set releases it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingImage {
    file: LocalFile,
    preview: PreviewUrl,
}

impl PendingImage {
    pub(crate) fn new(file: LocalFile, preview: PreviewUrl) -> Self {
        Self { file, preview }
    }

    pub fn file(&self) -> &LocalFile {
        &self.file
    }

    pub fn preview(&self) -> &PreviewUrl {
        &self.preview
    }
}

/// One entry of the edited image set.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    /// Already stored server-side under a public URL.
    Persisted { url: String },
    /// Local-only; must be uploaded before a row can reference it.
    Pending(PendingImage),
}

impl ImageRef {
    pub fn persisted(url: impl Into<String>) -> Self {
        ImageRef::Persisted { url: url.into() }
    }

    /// URL the carousel renders for this entry.
    pub fn display_url(&self) -> &str {
        match self {
            ImageRef::Persisted { url } => url,
            ImageRef::Pending(pending) => pending.preview.as_str(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ImageRef::Pending(_))
    }

    pub fn as_pending(&self) -> Option<&PendingImage> {
        match self {
            ImageRef::Pending(pending) => Some(pending),
            ImageRef::Persisted { .. } => None,
        }
    }
}

/// A row of the `product_images` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImageRow {
    pub product_id: ProductId,
    pub image_url: String,
}

impl ProductImageRow {
    pub fn new(product_id: ProductId, image_url: impl Into<String>) -> Self {
        Self {
            product_id,
            image_url: image_url.into(),
        }
    }
}

/// Row predicate for `product_images` reads and deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFilter {
    /// `product_id = <id>`
    ByProduct(ProductId),
}

impl ImageFilter {
    pub fn matches(&self, row: &ProductImageRow) -> bool {
        match self {
            ImageFilter::ByProduct(id) => &row.product_id == id,
        }
    }
}

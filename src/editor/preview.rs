//! # Local Previews
//!
//! Pending images are shown before upload through transient `blob:` URLs that
//! point at the in-memory file contents. The [`PreviewRegistry`] owns those
//! blobs. Every URL it issues stays alive until the image set revokes it, which
//! happens when the entry is removed or the form resets.

use crate::model::{LocalFile, PendingImage, PreviewUrl};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

const PREVIEW_SCHEME: &str = "blob:listing-editor/";

/// Cloneable handle to the set of live preview blobs.
#[derive(Clone, Default)]
pub struct PreviewRegistry {
    live: Arc<Mutex<HashMap<PreviewUrl, Arc<[u8]>>>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn live(&self) -> MutexGuard<'_, HashMap<PreviewUrl, Arc<[u8]>>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issues a preview URL for `file` and wraps both into a pending image.
    pub fn create(&self, file: LocalFile) -> PendingImage {
        let url = PreviewUrl(format!("{PREVIEW_SCHEME}{}", uuid::Uuid::new_v4()));
        self.live().insert(url.clone(), file.bytes.clone());
        debug!(preview = %url, name = %file.name, bytes = file.len(), "Preview created");
        PendingImage::new(file, url)
    }

    /// Releases a preview. Returns `false` if it was not live.
    pub fn revoke(&self, url: &PreviewUrl) -> bool {
        let released = self.live().remove(url).is_some();
        debug!(preview = %url, released, "Preview revoked");
        released
    }

    /// Bytes behind a live preview URL, as a renderer would fetch them.
    pub fn resolve(&self, url: &PreviewUrl) -> Option<Arc<[u8]>> {
        self.live().get(url).cloned()
    }

    pub fn live_count(&self) -> usize {
        self.live().len()
    }
}

impl std::fmt::Debug for PreviewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewRegistry")
            .field("live", &self.live_count())
            .finish()
    }
}

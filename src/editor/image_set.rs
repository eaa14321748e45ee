//! Ordered set of images attached to the listing, with its carousel window.

use super::carousel::{CarouselWindow, PAGE_SIZE};
use super::preview::PreviewRegistry;
use crate::model::{ImageRef, LocalFile};
use tracing::debug;

/// The images of the listing in display order.
///
/// Pending entries carry their own file handle, so removing an entry at an
/// index always drops the matching upload as well. The window is re-clamped
/// after every removal.
#[derive(Debug, Default)]
pub struct ImageSet {
    refs: Vec<ImageRef>,
    window: CarouselWindow,
    previews: PreviewRegistry,
}

impl ImageSet {
    pub fn new(previews: PreviewRegistry) -> Self {
        Self {
            refs: Vec::new(),
            window: CarouselWindow::new(),
            previews,
        }
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.refs.iter().filter(|r| r.is_pending()).count()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.refs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.refs.iter()
    }

    pub fn window(&self) -> CarouselWindow {
        self.window
    }

    /// Appends refs at the end. Duplicates are kept as distinct entries.
    pub fn append(&mut self, new_refs: impl IntoIterator<Item = ImageRef>) {
        let before = self.refs.len();
        self.refs.extend(new_refs);
        debug!(added = self.refs.len() - before, total = self.refs.len(), "Images appended");
    }

    /// Creates a preview for each picked file and appends it as pending.
    pub fn attach(&mut self, files: impl IntoIterator<Item = LocalFile>) -> usize {
        let previews = self.previews.clone();
        let before = self.refs.len();
        self.append(files.into_iter().map(|f| ImageRef::Pending(previews.create(f))));
        self.refs.len() - before
    }

    /// Removes the entry at `index`; out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<ImageRef> {
        if index >= self.refs.len() {
            debug!(index, total = self.refs.len(), "Remove ignored");
            return None;
        }
        let removed = self.refs.remove(index);
        if let ImageRef::Pending(pending) = &removed {
            self.previews.revoke(pending.preview());
        }
        self.window.clamp(self.refs.len());
        debug!(index, total = self.refs.len(), offset = self.window.offset(), "Image removed");
        Some(removed)
    }

    pub fn advance(&mut self) -> bool {
        self.window.advance(self.refs.len())
    }

    pub fn retreat(&mut self) -> bool {
        self.window.retreat()
    }

    /// The four carousel slots; `None` marks an empty slot at the tail.
    pub fn visible_slice(&self) -> [Option<&ImageRef>; PAGE_SIZE] {
        let mut slots = [None; PAGE_SIZE];
        let range = self.window.visible_range(self.refs.len());
        for (slot, image) in slots.iter_mut().zip(&self.refs[range]) {
            *slot = Some(image);
        }
        slots
    }

    /// Drops every entry, releasing all pending previews.
    pub fn clear(&mut self) {
        for image in self.refs.drain(..) {
            if let ImageRef::Pending(pending) = &image {
                self.previews.revoke(pending.preview());
            }
        }
        self.window.reset();
    }
}

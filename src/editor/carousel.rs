//! Four-wide sliding window over the image set.

use std::ops::Range;

/// Number of slots the carousel renders.
pub const PAGE_SIZE: usize = 4;

/// Offset of the first visible image. Everything else is derived from
/// `(image_count, offset)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselWindow {
    offset: usize,
}

impl CarouselWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Largest valid offset for a set of `count` images.
    pub fn max_offset(count: usize) -> usize {
        count.saturating_sub(PAGE_SIZE)
    }

    /// Moves one position right. Returns whether the offset changed.
    pub fn advance(&mut self, count: usize) -> bool {
        if self.offset < Self::max_offset(count) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    /// Moves one position left. Returns whether the offset changed.
    pub fn retreat(&mut self) -> bool {
        if self.offset > 0 {
            self.offset -= 1;
            true
        } else {
            false
        }
    }

    /// Pulls the offset back after the set shrank.
    pub fn clamp(&mut self, count: usize) {
        self.offset = self.offset.min(Self::max_offset(count));
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Indices of the visible images; shorter than a page at the tail.
    pub fn visible_range(&self, count: usize) -> Range<usize> {
        let start = self.offset.min(count);
        start..(start + PAGE_SIZE).min(count)
    }

    pub fn shows_retreat(&self, count: usize) -> bool {
        count > PAGE_SIZE && self.offset > 0
    }

    pub fn shows_advance(&self, count: usize) -> bool {
        self.offset < Self::max_offset(count)
    }
}

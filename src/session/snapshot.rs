//! Read-only view of the session state, as the page would render it.

use crate::editor::{ProductFormState, PAGE_SIZE};
use crate::model::{Category, GeoPoint};
use crate::sequencer::LoadReport;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    pub title: String,
    pub category: Option<Category>,
    pub price: String,
    pub description: String,
    pub location: GeoPoint,
    pub image_count: usize,
    pub pending_count: usize,
    pub offset: usize,
    /// Display URLs of the four carousel slots; `None` for an empty slot.
    pub visible: [Option<String>; PAGE_SIZE],
    pub show_retreat: bool,
    pub show_advance: bool,
    /// `None` until the load sequence has run.
    pub load: Option<LoadReport>,
}

impl EditorSnapshot {
    pub(crate) fn capture(form: &ProductFormState, load: Option<&LoadReport>) -> Self {
        let count = form.images.len();
        let window = form.images.window();
        let slots = form.images.visible_slice();
        Self {
            title: form.title.clone(),
            category: form.category,
            price: form.price.clone(),
            description: form.description.clone(),
            location: form.geolocation.point().clone(),
            image_count: count,
            pending_count: form.images.pending_count(),
            offset: window.offset(),
            visible: slots.map(|slot| slot.map(|image| image.display_url().to_string())),
            show_retreat: window.shows_retreat(count),
            show_advance: window.shows_advance(count),
            load: load.cloned(),
        }
    }
}

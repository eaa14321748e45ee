//! In-memory state of the listing editor.
//!
//! - [`ImageSet`] with its [`CarouselWindow`]
//! - [`GeolocationState`]
//! - [`ProductFormState`], which owns the two above
//! - [`PreviewRegistry`] for transient previews of pending uploads

pub mod carousel;
pub mod form;
pub mod geolocation;
pub mod image_set;
pub mod preview;

pub use carousel::{CarouselWindow, PAGE_SIZE};
pub use form::{ProductFormState, RequiredField, ValidatedSubmission, ValidationError};
pub use geolocation::GeolocationState;
pub use image_set::ImageSet;
pub use preview::PreviewRegistry;

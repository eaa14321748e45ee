//! Pure data structures (DTOs) shared by the editor, the sequencers and the stores.

pub mod geo;
pub mod image;
pub mod product;

pub use geo::*;
pub use image::*;
pub use product::*;

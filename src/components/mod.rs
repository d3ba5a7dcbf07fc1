//! UI Components for the autobiography page.

mod button;
mod gallery;
mod lightbox;

pub use gallery::PhotoGallery;
pub use lightbox::Lightbox;

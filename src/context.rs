//! Page context for the autobiography app.
//!
//! The loaded portfolio is injected at launch; the lightbox controller and
//! the overlay view signal are provided by [`crate::app::App`].
//!
//! ## Usage
//!
//! ```ignore
//! let mut lightbox = use_lightbox();
//! lightbox.write().open(2)?;
//! ```

use autobiography_core::{Gallery, LightboxController};
use dioxus::prelude::*;

use crate::overlay::{OverlayView, WebviewOverlay};

/// Page content loaded from the manifest before launch.
#[derive(Clone, Debug, PartialEq)]
pub struct Portfolio {
    pub title: String,
    pub tagline: Option<String>,
    pub gallery: Gallery,
}

/// The single lightbox controller for the page.
pub type SharedLightbox = Signal<LightboxController<WebviewOverlay>>;

/// Hook to access the portfolio passed in at launch.
pub fn use_portfolio() -> Portfolio {
    use_context::<Portfolio>()
}

/// Hook to access the lightbox controller.
///
/// All lightbox input (clicks, keys) goes through this signal.
pub fn use_lightbox() -> SharedLightbox {
    use_context::<SharedLightbox>()
}

/// Hook to read what the overlay currently shows.
pub fn use_overlay_view() -> Signal<OverlayView> {
    use_context::<Signal<OverlayView>>()
}

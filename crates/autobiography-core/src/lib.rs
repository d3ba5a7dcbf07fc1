//! Autobiography Core Library
//!
//! Gallery model and lightbox state machine for the autobiography portfolio
//! page, kept free of any UI toolkit so it can be tested headless.
//!
//! ## Overview
//!
//! The page shows a grid of photos. Clicking one opens a full-window
//! lightbox that pages through the gallery with wraparound, closes on
//! Escape, the close control or a click on the backdrop, and keeps the page
//! behind it from scrolling while open.
//!
//! ## Quick Start
//!
//! ```
//! use autobiography_core::{HeadlessOverlay, LightboxController, PortfolioManifest};
//!
//! let manifest = PortfolioManifest::from_json(r#"{
//!     "title": "My Story",
//!     "gallery": [
//!         { "src": "img/1.jpg", "alt": "Hometown" },
//!         { "src": "img/2.jpg", "alt": "First job" },
//!         { "src": "img/3.jpg", "alt": "Wedding" }
//!     ]
//! }"#)?;
//!
//! let mut lightbox = LightboxController::new(manifest.gallery()?, HeadlessOverlay::new());
//! lightbox.open(0)?;
//! lightbox.handle_key_name("ArrowLeft");
//! assert_eq!(lightbox.current_item().map(|i| i.caption()), Some("Wedding"));
//!
//! lightbox.handle_key_name("Escape");
//! assert!(!lightbox.is_open());
//! # Ok::<(), autobiography_core::PortfolioError>(())
//! ```

pub mod error;
pub mod gallery;
pub mod host;
pub mod lightbox;
pub mod logging;
pub mod manifest;

// Re-exports
pub use error::{PortfolioError, PortfolioResult};
pub use gallery::{Gallery, GalleryItem, Step};
pub use host::{HeadlessOverlay, OverlayContent, OverlayEvent, OverlayHost};
pub use lightbox::{LightboxController, LightboxKey, LightboxState};
pub use manifest::{resolve_manifest, ManifestImage, ManifestSource, PortfolioManifest};

//! Lightbox controller
//!
//! Two-state machine (closed / open at an index) over a fixed [`Gallery`].
//! Every transition synchronously pushes its effect to the [`OverlayHost`].
//!
//! ## Transitions
//!
//! ```text
//!            open(i)                next / previous
//!  Closed ───────────────▶ Open{i} ◀──────────────┐
//!    ▲                        │  └────────────────┘
//!    └────── close / Escape / backdrop click ─────┘
//! ```

use crate::error::{PortfolioError, PortfolioResult};
use crate::gallery::{Gallery, GalleryItem, Step};
use crate::host::{OverlayContent, OverlayHost};

/// Whether the lightbox is showing, and which image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { index: usize },
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            LightboxState::Open { index } => Some(*index),
            LightboxState::Closed => None,
        }
    }
}

/// Keys the lightbox reacts to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" => Some(LightboxKey::Escape),
            "ArrowLeft" => Some(LightboxKey::ArrowLeft),
            "ArrowRight" => Some(LightboxKey::ArrowRight),
            _ => None,
        }
    }

    pub fn key_name(&self) -> &'static str {
        match self {
            LightboxKey::Escape => "Escape",
            LightboxKey::ArrowLeft => "ArrowLeft",
            LightboxKey::ArrowRight => "ArrowRight",
        }
    }

    pub const ALL: [LightboxKey; 3] = [
        LightboxKey::Escape,
        LightboxKey::ArrowLeft,
        LightboxKey::ArrowRight,
    ];
}

/// Owns the gallery, the lightbox state and the overlay it drives.
///
/// # Example
///
/// ```
/// use autobiography_core::{Gallery, GalleryItem, HeadlessOverlay, LightboxController};
///
/// let gallery = Gallery::new(vec![
///     GalleryItem::new("img/1.jpg", "First day of school"),
///     GalleryItem::new("img/2.jpg", "Graduation"),
/// ]);
/// let mut lightbox = LightboxController::new(gallery, HeadlessOverlay::new());
///
/// lightbox.open(1).unwrap();
/// lightbox.next();
/// assert_eq!(lightbox.current_index(), Some(0));
///
/// lightbox.close();
/// assert!(!lightbox.host().is_scroll_locked());
/// ```
#[derive(Debug)]
pub struct LightboxController<H: OverlayHost> {
    gallery: Gallery,
    state: LightboxState,
    host: H,
}

impl<H: OverlayHost> LightboxController<H> {
    /// Create a closed lightbox. The host is not touched until the first
    /// transition; it is expected to start hidden.
    pub fn new(gallery: Gallery, host: H) -> Self {
        Self {
            gallery,
            state: LightboxState::Closed,
            host,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.current_index().and_then(|i| self.gallery.get(i))
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Show the image at `index` and suspend page scrolling.
    ///
    /// Fails without changing anything if `index` is not in the gallery.
    pub fn open(&mut self, index: usize) -> PortfolioResult<()> {
        if index >= self.gallery.len() {
            tracing::warn!(index, len = self.gallery.len(), "Rejected lightbox open");
            return Err(PortfolioError::IndexOutOfRange {
                index,
                len: self.gallery.len(),
            });
        }
        tracing::debug!(index, "Opening lightbox");
        self.show(index);
        Ok(())
    }

    /// Hide the overlay and give scrolling back to the page.
    ///
    /// Safe to call while closed; the host is reset either way.
    pub fn close(&mut self) {
        if self.state.is_open() {
            tracing::debug!(index = ?self.current_index(), "Closing lightbox");
        }
        self.state = LightboxState::Closed;
        self.host.set_visible(false);
        self.host.set_scroll_locked(false);
    }

    /// Advance one image, wrapping from the last to the first.
    pub fn next(&mut self) {
        self.step(Step::Next);
    }

    /// Go back one image, wrapping from the first to the last.
    pub fn previous(&mut self) {
        self.step(Step::Previous);
    }

    /// Click on the dimmed area around the image.
    pub fn backdrop_clicked(&mut self) {
        self.close();
    }

    /// Returns true if the key was consumed. Keys are ignored while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.state.is_open() {
            return false;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
        }
        true
    }

    pub fn handle_key_name(&mut self, name: &str) -> bool {
        match LightboxKey::from_key_name(name) {
            Some(key) => self.handle_key(key),
            None => false,
        }
    }

    fn step(&mut self, step: Step) {
        let Some(from) = self.state.current_index() else {
            return;
        };
        let Some(to) = self.gallery.step(from, step) else {
            return;
        };
        tracing::debug!(from, to, ?step, "Lightbox navigation");
        self.show(to);
    }

    fn show(&mut self, index: usize) {
        let Some(item) = self.gallery.get(index) else {
            return;
        };
        let content = OverlayContent::for_item(item, index, self.gallery.len());
        self.state = LightboxState::Open { index };
        self.host.render(&content);
        self.host.set_visible(true);
        self.host.set_scroll_locked(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HeadlessOverlay, OverlayEvent};

    fn lightbox(n: usize) -> LightboxController<HeadlessOverlay> {
        let gallery = (0..n)
            .map(|i| GalleryItem::new(format!("img/{i}.jpg"), format!("Photo {i}")))
            .collect();
        LightboxController::new(gallery, HeadlessOverlay::new())
    }

    #[test]
    fn test_new_is_closed_and_leaves_host_alone() {
        let lb = lightbox(3);
        assert_eq!(lb.state(), LightboxState::Closed);
        assert!(lb.host().events().is_empty());
    }

    #[test]
    fn test_open_renders_shows_and_locks() {
        let mut lb = lightbox(3);
        lb.open(1).unwrap();

        assert_eq!(lb.state(), LightboxState::Open { index: 1 });
        assert_eq!(lb.current_item().map(|i| i.src()), Some("img/1.jpg"));

        let events = lb.host().events();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], OverlayEvent::Rendered(c) if c.caption == "Photo 1"));
        assert_eq!(events[1], OverlayEvent::Visible(true));
        assert_eq!(events[2], OverlayEvent::ScrollLocked(true));
    }

    #[test]
    fn test_open_out_of_range_keeps_state() {
        let mut lb = lightbox(2);
        lb.open(0).unwrap();

        let err = lb.open(5).unwrap_err();
        assert!(matches!(err, PortfolioError::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(lb.current_index(), Some(0));
    }

    #[test]
    fn test_close_twice_is_harmless() {
        let mut lb = lightbox(2);
        lb.open(1).unwrap();
        lb.close();
        lb.close();

        assert!(!lb.is_open());
        assert!(!lb.host().is_visible());
        assert!(!lb.host().is_scroll_locked());
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        let mut lb = lightbox(3);
        lb.next();
        lb.previous();
        assert_eq!(lb.state(), LightboxState::Closed);
        assert!(lb.host().events().is_empty());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut lb = lightbox(3);
        assert!(!lb.handle_key(LightboxKey::ArrowRight));
        assert!(!lb.handle_key(LightboxKey::Escape));
        assert!(lb.host().events().is_empty());
    }

    #[test]
    fn test_key_mapping() {
        let mut lb = lightbox(3);
        lb.open(0).unwrap();

        assert!(lb.handle_key_name("ArrowRight"));
        assert_eq!(lb.current_index(), Some(1));
        assert!(lb.handle_key_name("ArrowLeft"));
        assert!(lb.handle_key_name("ArrowLeft"));
        assert_eq!(lb.current_index(), Some(2));
        assert!(!lb.handle_key_name("Enter"));
        assert!(lb.handle_key_name("Escape"));
        assert!(!lb.is_open());
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in LightboxKey::ALL {
            assert_eq!(LightboxKey::from_key_name(key.key_name()), Some(key));
        }
        assert_eq!(LightboxKey::from_key_name("escape"), None);
    }

    #[test]
    fn test_counter_follows_navigation() {
        let mut lb = lightbox(4);
        lb.open(3).unwrap();
        lb.next();
        assert_eq!(lb.host().content().map(|c| c.counter()), Some("1 / 4".to_string()));
    }
}

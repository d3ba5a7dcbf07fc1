//! Overlay host seam
//!
//! The lightbox controller never touches a UI toolkit directly. It drives an
//! [`OverlayHost`], which the desktop app implements on top of Dioxus signals
//! and which [`HeadlessOverlay`] implements in memory.

use crate::gallery::GalleryItem;

/// What the overlay shows for the current image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayContent {
    pub src: String,
    pub caption: String,
    /// 1-based position of the image in the gallery
    pub position: usize,
    pub total: usize,
}

impl OverlayContent {
    pub fn for_item(item: &GalleryItem, index: usize, total: usize) -> Self {
        Self {
            src: item.src().to_string(),
            caption: item.caption().to_string(),
            position: index + 1,
            total,
        }
    }

    /// Counter label, e.g. "2 / 5"
    pub fn counter(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

/// Surface the lightbox renders into.
pub trait OverlayHost {
    /// Put the image and caption on the overlay.
    fn render(&mut self, content: &OverlayContent);

    /// Show or hide the overlay.
    fn set_visible(&mut self, visible: bool);

    /// Suspend or restore scrolling of the page behind the overlay.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// A call made on a [`HeadlessOverlay`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    Rendered(OverlayContent),
    Visible(bool),
    ScrollLocked(bool),
}

/// In-memory overlay host.
///
/// Keeps the current surface state and a log of every call, so the
/// controller can be driven and inspected without a window.
#[derive(Debug, Clone, Default)]
pub struct HeadlessOverlay {
    content: Option<OverlayContent>,
    visible: bool,
    scroll_locked: bool,
    events: Vec<OverlayEvent>,
}

impl HeadlessOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<&OverlayContent> {
        self.content.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn events(&self) -> &[OverlayEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl OverlayHost for HeadlessOverlay {
    fn render(&mut self, content: &OverlayContent) {
        self.content = Some(content.clone());
        self.events.push(OverlayEvent::Rendered(content.clone()));
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.events.push(OverlayEvent::Visible(visible));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        self.events.push(OverlayEvent::ScrollLocked(locked));
    }
}

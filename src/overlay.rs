//! Webview overlay host
//!
//! Implements the core [`OverlayHost`] on top of a Dioxus signal that the
//! `Lightbox` component renders from, plus the page's body scroll lock.

use autobiography_core::{OverlayContent, OverlayHost};
use dioxus::prelude::*;

/// Snapshot the `Lightbox` component renders
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayView {
    pub visible: bool,
    pub content: OverlayContent,
}

impl OverlayView {
    /// Inline style toggling the overlay; it stays mounted either way.
    pub fn display_style(&self) -> &'static str {
        if self.visible {
            "display: flex;"
        } else {
            "display: none;"
        }
    }
}

/// JS that suspends or restores page scrolling behind the overlay
pub fn scroll_lock_script(locked: bool) -> &'static str {
    if locked {
        "document.body.style.overflow = 'hidden';"
    } else {
        "document.body.style.overflow = 'auto';"
    }
}

/// Overlay host backed by the page's [`OverlayView`] signal.
#[derive(Clone, Copy)]
pub struct WebviewOverlay {
    view: Signal<OverlayView>,
}

impl WebviewOverlay {
    pub fn new(view: Signal<OverlayView>) -> Self {
        Self { view }
    }
}

impl OverlayHost for WebviewOverlay {
    fn render(&mut self, content: &OverlayContent) {
        self.view.write().content = content.clone();
    }

    fn set_visible(&mut self, visible: bool) {
        if self.view.peek().visible != visible {
            self.view.write().visible = visible;
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        tracing::trace!(locked, "Body scroll lock");
        let _ = document::eval(scroll_lock_script(locked));
    }
}

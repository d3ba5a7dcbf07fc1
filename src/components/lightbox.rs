//! Lightbox Overlay Component
//!
//! The one full-window image viewer on the page. Mounted once by `App` and
//! only ever shown, hidden and refilled afterwards.

use autobiography_core::Step;
use dioxus::prelude::*;

use super::button::{CloseButton, NavButton};
use crate::context::{use_lightbox, use_overlay_view};

/// Full-window image overlay
///
/// Clicking the dimmed backdrop closes it. Clicks on the image, caption and
/// controls are stopped before they reach the backdrop.
#[component]
pub fn Lightbox() -> Element {
    let mut lightbox = use_lightbox();
    let view = use_overlay_view();
    let view = view();
    let content = view.content.clone();

    rsx! {
        div {
            id: "lightbox",
            class: "lightbox",
            style: "{view.display_style()}",
            onclick: move |_| lightbox.write().backdrop_clicked(),

            CloseButton { onclick: move |_| lightbox.write().close() }

            img {
                id: "lightbox-img",
                class: "lightbox-content",
                src: "{content.src}",
                alt: "{content.caption}",
                onclick: move |e: MouseEvent| e.stop_propagation(),
            }

            div {
                class: "lightbox-caption",
                onclick: move |e: MouseEvent| e.stop_propagation(),
                "{content.caption}"
                if content.total > 0 {
                    span { class: "lightbox-counter", "{content.counter()}" }
                }
            }

            NavButton {
                direction: Step::Previous,
                onclick: move |_| lightbox.write().previous(),
            }
            NavButton {
                direction: Step::Next,
                onclick: move |_| lightbox.write().next(),
            }
        }
    }
}

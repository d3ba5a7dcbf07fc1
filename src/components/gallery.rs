//! Photo Gallery Component
//!
//! Thumbnail grid; clicking a photo opens it in the lightbox.

use dioxus::prelude::*;

use crate::context::use_lightbox;

/// Thumbnail grid of the page's gallery
///
/// Renders nothing for an empty gallery, so the lightbox cannot be opened.
#[component]
pub fn PhotoGallery() -> Element {
    let mut lightbox = use_lightbox();
    let items = lightbox.read().gallery().items().to_vec();

    if items.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "gallery",
            for (index, item) in items.into_iter().enumerate() {
                img {
                    key: "{index}",
                    class: "gallery__img",
                    src: "{item.src()}",
                    alt: "{item.caption()}",
                    onclick: move |_| {
                        if let Err(e) = lightbox.write().open(index) {
                            tracing::error!("Failed to open lightbox: {}", e);
                        }
                    },
                }
            }
        }
    }
}

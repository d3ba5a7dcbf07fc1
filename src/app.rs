use autobiography_core::{LightboxController, LightboxKey};
use dioxus::prelude::*;

use crate::components::{Lightbox, PhotoGallery};
use crate::context::{use_portfolio, SharedLightbox};
use crate::overlay::{OverlayView, WebviewOverlay};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the one lightbox controller and the one overlay for the page
/// lifetime, provides both as context, and subscribes to global key presses.
#[component]
pub fn App() -> Element {
    let portfolio = use_portfolio();

    let view: Signal<OverlayView> = use_signal(OverlayView::default);
    let gallery = portfolio.gallery.clone();
    let lightbox: SharedLightbox =
        use_signal(move || LightboxController::new(gallery, WebviewOverlay::new(view)));

    use_context_provider(|| view);
    use_context_provider(|| lightbox);

    use_future(move || forward_lightbox_keys(lightbox));

    rsx! {
        style { {GLOBAL_STYLES} }

        main { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "{portfolio.title}" }
                if let Some(tagline) = &portfolio.tagline {
                    p { class: "page-tagline", "{tagline}" }
                }
            }

            section { id: "gallery", class: "section",
                h2 { class: "section-header", "Gallery" }
                PhotoGallery {}
            }
        }

        Lightbox {}
    }
}

/// Page-wide keydown listener that only forwards the keys the lightbox uses.
pub fn key_forwarding_script() -> String {
    let checks = LightboxKey::ALL
        .iter()
        .map(|key| format!("event.key === '{}'", key.key_name()))
        .collect::<Vec<_>>()
        .join(" || ");

    format!(
        "document.addEventListener('keydown', (event) => {{ if ({checks}) {{ dioxus.send(event.key); }} }});"
    )
}

/// Feed forwarded keys to the controller for as long as the page lives.
///
/// Nothing is installed for an empty gallery.
async fn forward_lightbox_keys(mut lightbox: SharedLightbox) {
    if lightbox.peek().gallery().is_empty() {
        tracing::debug!("Empty gallery, keyboard navigation not installed");
        return;
    }

    let mut keys = document::eval(&key_forwarding_script());
    loop {
        match keys.recv::<String>().await {
            Ok(name) => {
                if lightbox.write().handle_key_name(&name) {
                    tracing::trace!(key = %name, "Lightbox key handled");
                }
            }
            Err(e) => {
                tracing::warn!("Keyboard subscription closed: {:?}", e);
                break;
            }
        }
    }
}

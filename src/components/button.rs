//! Lightbox Buttons
//!
//! Icon-only controls on the overlay. Every click is stopped here so it
//! never reaches the backdrop, which would close the lightbox.

use autobiography_core::Step;
use dioxus::prelude::*;

/// Icon button for compact overlay actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-lightbox".to_string(),
            "\u{00D7}"
        }
    }
}

/// CSS classes for a previous/next control
pub fn nav_class(direction: Step) -> &'static str {
    match direction {
        Step::Previous => "lightbox-nav prev",
        Step::Next => "lightbox-nav next",
    }
}

/// Chevron glyph for a previous/next control
pub fn nav_glyph(direction: Step) -> &'static str {
    match direction {
        Step::Previous => "\u{276E}",
        Step::Next => "\u{276F}",
    }
}

fn nav_label(direction: Step) -> &'static str {
    match direction {
        Step::Previous => "Previous image",
        Step::Next => "Next image",
    }
}

/// Previous / next chevron on the overlay edge
#[component]
pub fn NavButton(direction: Step, onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: nav_label(direction).to_string(),
            class: nav_class(direction).to_string(),
            "{nav_glyph(direction)}"
        }
    }
}

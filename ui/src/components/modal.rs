use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Confirmation dialog used before destructive or membership-changing calls.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = false)] destructive: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{title}" }
                p { class: "modal-text", "{message}" }
                div {
                    class: "modal-actions",
                    Button {
                        variant: if destructive { ButtonVariant::Destructive } else { ButtonVariant::Primary },
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

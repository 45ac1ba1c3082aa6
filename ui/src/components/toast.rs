//! Toast notifications. Success and failure messages from the gateway are
//! surfaced here; the stack renders above everything and each toast
//! auto-dismisses after its duration (or on click).

use dioxus::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastOptions {
    pub duration: Duration,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self {
            duration: Duration::from_secs(4),
        }
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for pushing toasts; cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Error, message, options);
    }

    fn push(&self, kind: ToastKind, message: String, options: ToastOptions) {
        let mut items = self.items;
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);
        items.write().push(Toast { id, kind, message });

        #[cfg(target_arch = "wasm32")]
        {
            let mut items = self.items;
            spawn(async move {
                gloo_timers::future::sleep(options.duration).await;
                items.write().retain(|t| t.id != id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = options;
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Provider that owns the toast stack and renders it top-center.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut items = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in items() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    },
                    onclick: {
                        let id = toast.id;
                        move |_| items.write().retain(|t| t.id != id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}

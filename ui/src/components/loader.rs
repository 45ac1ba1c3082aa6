//! Global loading indicator. Screens flip the shared signal around their
//! gateway calls; there is no reference counting, so overlapping calls can
//! hide the indicator early when the first one completes.

use dioxus::prelude::*;

/// The shared loading flag. Set to `true` before a call, `false` after.
pub fn use_loading() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Provider that owns the flag and renders the backdrop spinner while set.
#[component]
pub fn LoadingProvider(children: Element) -> Element {
    let loading = use_signal(|| false);
    use_context_provider(|| loading);

    rsx! {
        {children}
        if loading() {
            div {
                class: "loading-backdrop",
                div { class: "spinner" }
            }
        }
    }
}

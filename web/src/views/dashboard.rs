//! Default landing screen. Requires a session but no specific permission;
//! it is also where the guards send visitors who lack a screen's tag.

use dioxus::prelude::*;
use ui::use_session;

use super::apply_guard;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        let state = session();
        let _ = apply_guard(&state, None, nav);
    });

    let state = session();
    if state.loading {
        return rsx! { div { class: "page-placeholder", "Loading..." } };
    }
    let Some(current) = state.session else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "{current.role} > Dashboard" }
            }
            div {
                class: "dashboard-cards",
                div {
                    class: "card",
                    h2 { "Welcome, {current.user_name}" }
                    p { "{current.email}" }
                }
                div {
                    class: "card",
                    h2 { "Role" }
                    p { "{current.role}" }
                }
                div {
                    class: "card",
                    h2 { "Permissions" }
                    p { "{current.permissions.len()} granted" }
                }
            }
        }
    }
}

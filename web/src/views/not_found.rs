use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "page not-found",
            h1 { "Page not found" }
            p { "No screen matches /{path}." }
            Link { to: Route::Root {}, "Back to the console" }
        }
    }
}

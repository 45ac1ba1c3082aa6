use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Thin select wrapper; callers supply the `option` children.
#[component]
pub fn Select(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] value: String,
    #[props(default)] onchange: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "input select {class}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            {children}
        }
    }
}

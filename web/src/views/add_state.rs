//! State creation form: one state name plus a growable list of initial
//! district rows. Blank district rows are dropped before submission.

use api::{validate, State};
use dioxus::prelude::*;
use ui::components::{
    use_loading, use_toast, Button, ButtonVariant, Input, Label, ToastOptions,
};
use ui::use_session;

use super::{apply_guard, perm};

#[component]
pub fn AddState() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut loading = use_loading();

    let mut states = use_signal(Vec::<State>::new);
    let mut state_name = use_signal(String::new);
    let mut district_rows = use_signal(|| vec![String::new()]);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let state = session();
        if !apply_guard(&state, Some(perm::ADD_STATE), nav) {
            return;
        }
        // Loaded only for the duplicate-name check.
        spawn(async move {
            match api::view_states().await {
                Ok(list) => states.set(list),
                Err(err) => tracing::warn!("state catalog fetch failed: {err}"),
            }
        });
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let name = state_name().trim().to_string();
        if name.is_empty() {
            error.set(Some("State name is required".to_string()));
            return;
        }
        if validate::state_title_exists(&states(), &name) {
            error.set(Some("A state with this name already exists".to_string()));
            return;
        }
        let districts: Vec<String> = district_rows()
            .iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();

        spawn(async move {
            loading.set(true);
            match api::add_state(&name, &districts).await {
                Ok(()) => {
                    toast.success("State created".to_string(), ToastOptions::new());
                    state_name.set(String::new());
                    district_rows.set(vec![String::new()]);
                }
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Add State" }
            }

            form {
                class: "form-card",
                onsubmit: handle_submit,

                Label { html_for: "state-name", "State name" }
                Input {
                    id: "state-name",
                    placeholder: "State name",
                    value: state_name(),
                    oninput: move |evt: FormEvent| {
                        state_name.set(evt.value());
                        error.set(None);
                    },
                }

                Label { html_for: "district-0", "Districts" }
                for (index, value) in district_rows().into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "district-input-row",
                        Input {
                            id: "district-{index}",
                            placeholder: "District name",
                            value: value,
                            oninput: move |evt: FormEvent| {
                                district_rows.write()[index] = evt.value();
                            },
                        }
                        if district_rows().len() > 1 {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    district_rows.write().remove(index);
                                },
                                "Remove"
                            }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| district_rows.write().push(String::new()),
                    "Add another district"
                }

                if let Some(err) = error() {
                    p { class: "field-error", "{err}" }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Create State"
                }
            }
        }
    }
}

//! Append districts to an existing state. Picking a state loads its current
//! districts so duplicates are visible before submitting new rows.

use api::{District, State};
use dioxus::prelude::*;
use ui::components::{
    use_loading, use_toast, Button, ButtonVariant, Input, Label, Select, ToastOptions,
};
use ui::use_session;

use super::{apply_guard, perm};

#[component]
pub fn AddDistrict() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut loading = use_loading();

    let mut states = use_signal(Vec::<State>::new);
    let mut selected_state = use_signal(String::new);
    let mut existing = use_signal(Vec::<District>::new);
    let mut district_rows = use_signal(|| vec![String::new()]);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let state = session();
        if !apply_guard(&state, Some(perm::ADD_DISTRICT), nav) {
            return;
        }
        spawn(async move {
            loading.set(true);
            match api::view_states().await {
                Ok(list) => states.set(list),
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            loading.set(false);
        });
    });

    let load_districts = move |state_id: String| {
        spawn(async move {
            if state_id.is_empty() {
                existing.set(Vec::new());
                return;
            }
            loading.set(true);
            match api::view_districts(&state_id).await {
                Ok(list) => existing.set(list),
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            loading.set(false);
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let state_id = selected_state();
        if state_id.is_empty() {
            error.set(Some("Select a state".to_string()));
            return;
        }
        let districts: Vec<String> = district_rows()
            .iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();
        if districts.is_empty() {
            error.set(Some("Enter at least one district".to_string()));
            return;
        }

        spawn(async move {
            loading.set(true);
            match api::add_districts(&state_id, &districts).await {
                Ok(()) => {
                    toast.success("Districts added".to_string(), ToastOptions::new());
                    district_rows.set(vec![String::new()]);
                    match api::view_districts(&state_id).await {
                        Ok(list) => existing.set(list),
                        Err(err) => tracing::warn!("district refresh failed: {err}"),
                    }
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
                h1 { "Add District" }
            }

            form {
                class: "form-card",
                onsubmit: handle_submit,

                Label { html_for: "district-state", "State" }
                Select {
                    id: "district-state",
                    value: selected_state(),
                    onchange: move |evt: FormEvent| {
                        let id = evt.value();
                        selected_state.set(id.clone());
                        error.set(None);
                        load_districts(id);
                    },
                    option { value: "", "Select a state" }
                    for state in states() {
                        option {
                            value: "{state.id}",
                            selected: state.id == selected_state(),
                            "{state.title}"
                        }
                    }
                }

                if !existing().is_empty() {
                    div {
                        class: "existing-districts",
                        h2 { "Existing districts" }
                        ul {
                            for district in existing() {
                                li { key: "{district.id}", "{district.name}" }
                            }
                        }
                    }
                }

                Label { html_for: "new-district-0", "New districts" }
                for (index, value) in district_rows().into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "district-input-row",
                        Input {
                            id: "new-district-{index}",
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
                    "Add Districts"
                }
            }
        }
    }
}

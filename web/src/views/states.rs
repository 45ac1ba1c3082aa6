//! Geography browser: an accordion of states, each expanding to its
//! districts. State renames and deletes re-fetch the catalog; district
//! changes are patched locally since the payload already carries the full
//! district list per state.

use api::{validate, District, State};
use dioxus::prelude::*;
use ui::components::{
    use_loading, use_toast, Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay,
    ToastOptions,
};
use ui::use_session;

use super::{apply_guard, perm};

#[component]
pub fn States() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut loading = use_loading();

    let mut states = use_signal(Vec::<State>::new);
    let mut open_state_id = use_signal(|| Option::<String>::None);
    let mut state_search = use_signal(String::new);
    let mut district_search = use_signal(String::new);
    let mut editing_state = use_signal(|| Option::<State>::None);
    let mut pending_delete_state = use_signal(|| Option::<State>::None);
    let mut editing_district = use_signal(|| Option::<(String, District)>::None);
    let mut pending_delete_district = use_signal(|| Option::<(String, District)>::None);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        let state = session();
        let _ = reload();
        if !apply_guard(&state, Some(perm::VIEW_STATE), nav) {
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

    let current = session();
    let can_edit_state = current.has_permission(perm::EDIT_STATE);
    let can_delete_state = current.has_permission(perm::DELETE_STATE);
    let can_edit_district = current.has_permission(perm::EDIT_DISTRICT);
    let can_delete_district = current.has_permission(perm::DELETE_DISTRICT);

    let query = state_search().to_lowercase();
    let visible_states: Vec<State> = states()
        .into_iter()
        .filter(|s| query.is_empty() || s.title.to_lowercase().contains(&query))
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "States" }
                Input {
                    class: "search",
                    placeholder: "Search states",
                    value: state_search(),
                    oninput: move |evt: FormEvent| state_search.set(evt.value()),
                }
            }

            div {
                class: "accordion",
                for state in visible_states {
                    div {
                        key: "{state.id}",
                        class: "accordion-item",
                        div {
                            class: "accordion-header",
                            button {
                                class: "accordion-toggle",
                                onclick: {
                                    let id = state.id.clone();
                                    move |_| {
                                        if open_state_id() == Some(id.clone()) {
                                            open_state_id.set(None);
                                        } else {
                                            open_state_id.set(Some(id.clone()));
                                            district_search.set(String::new());
                                        }
                                    }
                                },
                                span { "{state.title}" }
                                span { class: "badge", "{state.districts.len()} districts" }
                            }
                            div {
                                class: "row-actions",
                                if can_edit_state {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let state = state.clone();
                                            move |_| editing_state.set(Some(state.clone()))
                                        },
                                        "Edit"
                                    }
                                }
                                if can_delete_state {
                                    Button {
                                        variant: ButtonVariant::Destructive,
                                        onclick: {
                                            let state = state.clone();
                                            move |_| pending_delete_state.set(Some(state.clone()))
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }

                        if open_state_id() == Some(state.id.clone()) {
                            div {
                                class: "accordion-body",
                                Input {
                                    class: "search",
                                    placeholder: "Search districts",
                                    value: district_search(),
                                    oninput: move |evt: FormEvent| district_search.set(evt.value()),
                                }
                                ul {
                                    class: "district-list",
                                    for district in state
                                        .districts
                                        .iter()
                                        .filter(|d| {
                                            let q = district_search().to_lowercase();
                                            q.is_empty() || d.name.to_lowercase().contains(&q)
                                        })
                                        .cloned()
                                    {
                                        li {
                                            key: "{district.id}",
                                            class: "district-row",
                                            span { "{district.name}" }
                                            div {
                                                class: "row-actions",
                                                if can_edit_district {
                                                    Button {
                                                        variant: ButtonVariant::Outline,
                                                        onclick: {
                                                            let state_id = state.id.clone();
                                                            let district = district.clone();
                                                            move |_| editing_district
                                                                .set(Some((state_id.clone(), district.clone())))
                                                        },
                                                        "Edit"
                                                    }
                                                }
                                                if can_delete_district {
                                                    Button {
                                                        variant: ButtonVariant::Destructive,
                                                        onclick: {
                                                            let state_id = state.id.clone();
                                                            let district = district.clone();
                                                            move |_| pending_delete_district
                                                                .set(Some((state_id.clone(), district.clone())))
                                                        },
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(state) = editing_state() {
                EditStateModal {
                    key: "{state.id}",
                    state: state,
                    states: states(),
                    on_saved: move |_| {
                        editing_state.set(None);
                        reload.set(reload() + 1);
                    },
                    on_cancel: move |_| editing_state.set(None),
                }
            }

            if let Some(state) = pending_delete_state() {
                ConfirmDialog {
                    title: "Delete state".to_string(),
                    message: format!("Delete {} and all of its districts?", state.title),
                    confirm_label: "Delete".to_string(),
                    destructive: true,
                    on_confirm: {
                        let id = state.id.clone();
                        move |_| {
                            let id = id.clone();
                            spawn(async move {
                                loading.set(true);
                                match api::delete_state(&id).await {
                                    Ok(()) => {
                                        toast.success(
                                            "State deleted".to_string(),
                                            ToastOptions::new(),
                                        );
                                        reload.set(reload() + 1);
                                    }
                                    Err(err) => {
                                        toast.error(err.to_string(), ToastOptions::new())
                                    }
                                }
                                loading.set(false);
                                pending_delete_state.set(None);
                            });
                        }
                    },
                    on_cancel: move |_| pending_delete_state.set(None),
                }
            }

            if let Some((state_id, district)) = editing_district() {
                EditDistrictModal {
                    key: "{district.id}",
                    state_id: state_id,
                    district: district,
                    on_saved: move |renamed: District| {
                        if let Some((sid, _)) = editing_district() {
                            if let Some(entry) =
                                states.write().iter_mut().find(|s| s.id == sid)
                            {
                                if let Some(d) =
                                    entry.districts.iter_mut().find(|d| d.id == renamed.id)
                                {
                                    d.name = renamed.name.clone();
                                }
                            }
                        }
                        editing_district.set(None);
                    },
                    on_cancel: move |_| editing_district.set(None),
                }
            }

            if let Some((state_id, district)) = pending_delete_district() {
                ConfirmDialog {
                    title: "Delete district".to_string(),
                    message: format!("Delete the district {}?", district.name),
                    confirm_label: "Delete".to_string(),
                    destructive: true,
                    on_confirm: {
                        let state_id = state_id.clone();
                        let district_id = district.id.clone();
                        move |_| {
                            let state_id = state_id.clone();
                            let district_id = district_id.clone();
                            spawn(async move {
                                loading.set(true);
                                match api::delete_district(&state_id, &district_id).await {
                                    Ok(()) => {
                                        if let Some(entry) =
                                            states.write().iter_mut().find(|s| s.id == state_id)
                                        {
                                            entry.districts.retain(|d| d.id != district_id);
                                        }
                                        toast.success(
                                            "District deleted".to_string(),
                                            ToastOptions::new(),
                                        );
                                    }
                                    Err(err) => {
                                        toast.error(err.to_string(), ToastOptions::new())
                                    }
                                }
                                loading.set(false);
                                pending_delete_district.set(None);
                            });
                        }
                    },
                    on_cancel: move |_| pending_delete_district.set(None),
                }
            }
        }
    }
}

#[component]
fn EditStateModal(
    state: State,
    states: Vec<State>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut loading = use_loading();

    let state_id = state.id.clone();
    let mut title = use_signal(|| state.title.clone());
    let mut error = use_signal(|| Option::<String>::None);

    let others: Vec<State> = states.iter().filter(|s| s.id != state.id).cloned().collect();

    let handle_save = move |_| {
        let t = title().trim().to_string();
        if t.is_empty() {
            error.set(Some("State name is required".to_string()));
            return;
        }
        if validate::state_title_exists(&others, &t) {
            error.set(Some("A state with this name already exists".to_string()));
            return;
        }
        let id = state_id.clone();
        spawn(async move {
            loading.set(true);
            match api::edit_state(&id, &t).await {
                Ok(()) => {
                    toast.success("State updated".to_string(), ToastOptions::new());
                    on_saved.call(());
                }
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            loading.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "Edit state" }

                Label { html_for: "edit-state-title", "Name" }
                Input {
                    id: "edit-state-title",
                    value: title(),
                    oninput: move |evt: FormEvent| {
                        title.set(evt.value());
                        error.set(None);
                    },
                }

                if let Some(err) = error() {
                    p { class: "field-error", "{err}" }
                }

                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: handle_save,
                        "Save"
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

#[component]
fn EditDistrictModal(
    state_id: String,
    district: District,
    on_saved: EventHandler<District>,
    on_cancel: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut loading = use_loading();

    let district_id = district.id.clone();
    let mut name = use_signal(|| district.name.clone());
    let mut error = use_signal(|| Option::<String>::None);

    let handle_save = move |_| {
        let n = name().trim().to_string();
        if n.is_empty() {
            error.set(Some("District name is required".to_string()));
            return;
        }
        let state_id = state_id.clone();
        let district_id = district_id.clone();
        spawn(async move {
            loading.set(true);
            match api::edit_district(&state_id, &district_id, &n).await {
                Ok(()) => {
                    toast.success("District updated".to_string(), ToastOptions::new());
                    on_saved.call(District {
                        id: district_id.clone(),
                        name: n.clone(),
                    });
                }
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            loading.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "Edit district" }

                Label { html_for: "edit-district-name", "Name" }
                Input {
                    id: "edit-district-name",
                    value: name(),
                    oninput: move |evt: FormEvent| {
                        name.set(evt.value());
                        error.set(None);
                    },
                }

                if let Some(err) = error() {
                    p { class: "field-error", "{err}" }
                }

                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: handle_save,
                        "Save"
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

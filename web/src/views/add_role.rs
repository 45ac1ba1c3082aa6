//! Role creation plus catalog maintenance: the form at the top adds a role,
//! the list below toggles status, renames and deletes. Duplicate titles and
//! aliases are rejected client-side against the loaded catalog.

use api::{validate, Role};
use dioxus::prelude::*;
use ui::components::{
    use_loading, use_toast, Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay,
    ToastOptions,
};
use ui::use_session;

use super::{apply_guard, perm};

#[component]
pub fn AddRole() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut loading = use_loading();

    let mut roles = use_signal(Vec::<Role>::new);
    let mut title = use_signal(String::new);
    let mut alias = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<Role>::None);
    let mut pending_delete = use_signal(|| Option::<Role>::None);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        let state = session();
        let _ = reload();
        if !apply_guard(&state, Some(perm::ADD_ROLE), nav) {
            return;
        }
        spawn(async move {
            loading.set(true);
            match api::view_roles().await {
                Ok(list) => roles.set(list),
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            loading.set(false);
        });
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let t = title().trim().to_string();
        let a = alias().trim().to_string();

        if t.is_empty() {
            error.set(Some("Role title is required".to_string()));
            return;
        }
        if validate::role_title_exists(&roles(), &t) {
            error.set(Some("A role with this title already exists".to_string()));
            return;
        }
        if !a.is_empty() && validate::role_alias_exists(&roles(), &a) {
            error.set(Some("A role with this alias already exists".to_string()));
            return;
        }

        spawn(async move {
            loading.set(true);
            let alias_arg = if a.is_empty() { None } else { Some(a.as_str()) };
            match api::add_role(&t, alias_arg).await {
                Ok(()) => {
                    toast.success("Role created".to_string(), ToastOptions::new());
                    title.set(String::new());
                    alias.set(String::new());
                    reload.set(reload() + 1);
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
                h1 { "Add Role" }
            }

            form {
                class: "form-card",
                onsubmit: handle_submit,

                Label { html_for: "role-title", "Title" }
                Input {
                    id: "role-title",
                    placeholder: "Role title",
                    value: title(),
                    oninput: move |evt: FormEvent| {
                        title.set(evt.value());
                        error.set(None);
                    },
                }

                Label { html_for: "role-alias", "Alias (optional)" }
                Input {
                    id: "role-alias",
                    placeholder: "Short alias",
                    value: alias(),
                    oninput: move |evt: FormEvent| {
                        alias.set(evt.value());
                        error.set(None);
                    },
                }

                if let Some(err) = error() {
                    p { class: "field-error", "{err}" }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Create Role"
                }
            }

            h2 { "Existing roles" }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Alias" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for role in roles() {
                        tr {
                            key: "{role.id}",
                            td { "{role.title}" }
                            td { {role.alias.clone().unwrap_or_default()} }
                            td {
                                span {
                                    class: if role.status == "Active" { "badge badge-active" } else { "badge badge-inactive" },
                                    "{role.status}"
                                }
                            }
                            td {
                                class: "row-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let id = role.id.clone();
                                        move |_| {
                                            let id = id.clone();
                                            spawn(async move {
                                                loading.set(true);
                                                match api::toggle_role_status(&id).await {
                                                    Ok(()) => {
                                                        toast.success(
                                                            "Role status updated".to_string(),
                                                            ToastOptions::new(),
                                                        );
                                                        reload.set(reload() + 1);
                                                    }
                                                    Err(err) => toast.error(
                                                        err.to_string(),
                                                        ToastOptions::new(),
                                                    ),
                                                }
                                                loading.set(false);
                                            });
                                        }
                                    },
                                    if role.status == "Active" { "Deactivate" } else { "Activate" }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let role = role.clone();
                                        move |_| editing.set(Some(role.clone()))
                                    },
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let role = role.clone();
                                        move |_| pending_delete.set(Some(role.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            if let Some(role) = editing() {
                EditRoleModal {
                    key: "{role.id}",
                    role: role,
                    roles: roles(),
                    on_saved: move |_| {
                        editing.set(None);
                        reload.set(reload() + 1);
                    },
                    on_cancel: move |_| editing.set(None),
                }
            }

            if let Some(role) = pending_delete() {
                ConfirmDialog {
                    title: "Delete role".to_string(),
                    message: format!("Delete the role {}?", role.title),
                    confirm_label: "Delete".to_string(),
                    destructive: true,
                    on_confirm: {
                        let id = role.id.clone();
                        move |_| {
                            let id = id.clone();
                            spawn(async move {
                                loading.set(true);
                                match api::delete_role(&id).await {
                                    Ok(()) => {
                                        toast.success(
                                            "Role deleted".to_string(),
                                            ToastOptions::new(),
                                        );
                                        reload.set(reload() + 1);
                                    }
                                    Err(err) => {
                                        toast.error(err.to_string(), ToastOptions::new())
                                    }
                                }
                                loading.set(false);
                                pending_delete.set(None);
                            });
                        }
                    },
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn EditRoleModal(
    role: Role,
    roles: Vec<Role>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut loading = use_loading();

    let role_id = role.id.clone();
    let mut title = use_signal(|| role.title.clone());
    let mut alias = use_signal(|| role.alias.clone().unwrap_or_default());
    let mut error = use_signal(|| Option::<String>::None);

    // Duplicate checks must ignore the role being edited.
    let others: Vec<Role> = roles.iter().filter(|r| r.id != role.id).cloned().collect();

    let handle_save = move |_| {
        let t = title().trim().to_string();
        let a = alias().trim().to_string();
        if t.is_empty() {
            error.set(Some("Role title is required".to_string()));
            return;
        }
        if validate::role_title_exists(&others, &t) {
            error.set(Some("A role with this title already exists".to_string()));
            return;
        }
        if !a.is_empty() && validate::role_alias_exists(&others, &a) {
            error.set(Some("A role with this alias already exists".to_string()));
            return;
        }
        let id = role_id.clone();
        spawn(async move {
            loading.set(true);
            let alias_arg = if a.is_empty() { None } else { Some(a.as_str()) };
            match api::edit_role(&id, &t, alias_arg).await {
                Ok(()) => {
                    toast.success("Role updated".to_string(), ToastOptions::new());
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
                h2 { class: "modal-title", "Edit role" }

                Label { html_for: "edit-role-title", "Title" }
                Input {
                    id: "edit-role-title",
                    value: title(),
                    oninput: move |evt: FormEvent| {
                        title.set(evt.value());
                        error.set(None);
                    },
                }

                Label { html_for: "edit-role-alias", "Alias (optional)" }
                Input {
                    id: "edit-role-alias",
                    value: alias(),
                    oninput: move |evt: FormEvent| {
                        alias.set(evt.value());
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

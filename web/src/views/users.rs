//! User management table: status changes inline, edit in a modal, delete
//! behind a confirmation. Row actions only render when the session holds
//! the matching permission.

use std::str::FromStr;

use api::{validate, Role, User, UserStatus};
use dioxus::prelude::*;
use ui::components::{
    use_loading, use_toast, Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay,
    Select, ToastOptions,
};
use ui::use_session;

use super::{apply_guard, perm};

#[component]
pub fn Users() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut loading = use_loading();

    let mut users = use_signal(Vec::<User>::new);
    let mut roles = use_signal(Vec::<Role>::new);
    let mut editing = use_signal(|| Option::<User>::None);
    let mut pending_delete = use_signal(|| Option::<User>::None);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        let state = session();
        let _ = reload();
        if !apply_guard(&state, Some(perm::VIEW_USER), nav) {
            return;
        }
        spawn(async move {
            loading.set(true);
            match api::view_users().await {
                Ok(list) => users.set(list),
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            // The edit modal needs the role catalog for its picker.
            match api::view_roles().await {
                Ok(list) => roles.set(list),
                Err(err) => tracing::warn!("role catalog fetch failed: {err}"),
            }
            loading.set(false);
        });
    });

    let state = session();
    let can_edit = state.has_permission(perm::EDIT_USER);
    let can_delete = state.has_permission(perm::DELETE_USER);

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Users" }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Status" }
                        if can_edit || can_delete {
                            th { "Actions" }
                        }
                    }
                }
                tbody {
                    for user in users() {
                        tr {
                            key: "{user.id}",
                            td { "{user.unique_id}" }
                            td { "{user.name}" }
                            td { "{user.email}" }
                            td { "{user.role.title}" }
                            td {
                                if can_edit {
                                    Select {
                                        value: user.status.to_string(),
                                        onchange: {
                                            let id = user.id.clone();
                                            move |evt: FormEvent| {
                                                let Ok(status) = UserStatus::from_str(&evt.value()) else {
                                                    return;
                                                };
                                                let id = id.clone();
                                                spawn(async move {
                                                    loading.set(true);
                                                    match api::set_user_status(&id, status).await {
                                                        Ok(()) => {
                                                            toast.success(
                                                                "User status updated".to_string(),
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
                                        for status in UserStatus::ALL {
                                            option {
                                                value: "{status}",
                                                selected: status == user.status,
                                                "{status}"
                                            }
                                        }
                                    }
                                } else {
                                    span { class: "badge", "{user.status}" }
                                }
                            }
                            if can_edit || can_delete {
                                td {
                                    class: "row-actions",
                                    if can_edit {
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let user = user.clone();
                                                move |_| editing.set(Some(user.clone()))
                                            },
                                            "Edit"
                                        }
                                    }
                                    if can_delete {
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let user = user.clone();
                                                move |_| pending_delete.set(Some(user.clone()))
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

            if let Some(user) = editing() {
                EditUserModal {
                    key: "{user.id}",
                    user: user,
                    roles: roles(),
                    on_saved: move |_| {
                        editing.set(None);
                        reload.set(reload() + 1);
                    },
                    on_cancel: move |_| editing.set(None),
                }
            }

            if let Some(user) = pending_delete() {
                ConfirmDialog {
                    title: "Delete user".to_string(),
                    message: format!("Delete {}? This cannot be undone.", user.name),
                    confirm_label: "Delete".to_string(),
                    destructive: true,
                    on_confirm: {
                        let id = user.id.clone();
                        move |_| {
                            let id = id.clone();
                            spawn(async move {
                                loading.set(true);
                                match api::delete_user(&id).await {
                                    Ok(()) => {
                                        toast.success(
                                            "User deleted".to_string(),
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
fn EditUserModal(
    user: User,
    roles: Vec<Role>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut loading = use_loading();

    let user_id = user.id.clone();
    let mut name = use_signal(|| user.name.clone());
    let mut email = use_signal(|| user.email.clone());
    let mut password = use_signal(String::new);
    let mut role_id = use_signal(|| user.role.id.clone());
    let mut error = use_signal(|| Option::<String>::None);

    let handle_save = move |_| {
        let n = name().trim().to_string();
        let e = email().trim().to_string();
        if n.is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        if !validate::is_valid_email(&e) {
            error.set(Some("Email address is invalid".to_string()));
            return;
        }
        let id = user_id.clone();
        spawn(async move {
            loading.set(true);
            match api::edit_user(&id, &n, &e, &password(), &role_id()).await {
                Ok(()) => {
                    toast.success("User updated".to_string(), ToastOptions::new());
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
                h2 { class: "modal-title", "Edit user" }

                Label { html_for: "edit-name", "Name" }
                Input {
                    id: "edit-name",
                    value: name(),
                    oninput: move |evt: FormEvent| {
                        name.set(evt.value());
                        error.set(None);
                    },
                }

                Label { html_for: "edit-email", "Email" }
                Input {
                    id: "edit-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| {
                        email.set(evt.value());
                        error.set(None);
                    },
                }

                Label { html_for: "edit-password", "Password" }
                Input {
                    id: "edit-password",
                    r#type: "password",
                    placeholder: "Leave blank to keep current",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Label { html_for: "edit-role", "Role" }
                Select {
                    id: "edit-role",
                    value: role_id(),
                    onchange: move |evt: FormEvent| role_id.set(evt.value()),
                    for role in roles.iter() {
                        option {
                            value: "{role.id}",
                            selected: role.id == role_id(),
                            "{role.title}"
                        }
                    }
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

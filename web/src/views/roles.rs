//! Role accordion with permission membership management. Opening a role
//! shows every known permission with a checkbox; each toggle is confirmed,
//! sent as a single-element membership change, and applied locally on
//! success so the accordion never re-fetches mid-session.

use api::{apply_permission_toggle, Permission, Role, ToggleAction};
use dioxus::prelude::*;
use ui::components::{use_loading, use_toast, ConfirmDialog, Input, ToastOptions};
use ui::use_session;

use super::{apply_guard, perm};

#[component]
pub fn Roles() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut loading = use_loading();

    let mut roles = use_signal(Vec::<Role>::new);
    let mut permissions = use_signal(Vec::<Permission>::new);
    let mut active_role_id = use_signal(|| Option::<String>::None);
    // Local copy of the open role's membership, patched on each confirmed
    // toggle instead of re-fetching the whole catalog.
    let mut active_permissions = use_signal(Vec::<Permission>::new);
    let mut role_search = use_signal(String::new);
    let mut perm_search = use_signal(String::new);
    let mut pending = use_signal(|| Option::<(ToggleAction, Permission)>::None);

    use_effect(move || {
        let state = session();
        if !apply_guard(&state, Some(perm::VIEW_ROLE), nav) {
            return;
        }
        spawn(async move {
            loading.set(true);
            match api::view_roles().await {
                Ok(list) => roles.set(list),
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            match api::view_permissions().await {
                Ok(list) => permissions.set(list),
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            loading.set(false);
        });
    });

    let role_query = role_search().to_lowercase();
    let visible_roles: Vec<Role> = roles()
        .into_iter()
        .filter(|r| role_query.is_empty() || r.title.to_lowercase().contains(&role_query))
        .collect();

    let perm_query = perm_search().to_lowercase();
    let visible_permissions: Vec<Permission> = permissions()
        .into_iter()
        .filter(|p| {
            perm_query.is_empty() || p.permission_name.to_lowercase().contains(&perm_query)
        })
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Roles" }
                Input {
                    class: "search",
                    placeholder: "Search roles",
                    value: role_search(),
                    oninput: move |evt: FormEvent| role_search.set(evt.value()),
                }
            }

            div {
                class: "accordion",
                for role in visible_roles {
                    div {
                        key: "{role.id}",
                        class: "accordion-item",
                        button {
                            class: "accordion-header",
                            onclick: {
                                let role = role.clone();
                                move |_| {
                                    if active_role_id() == Some(role.id.clone()) {
                                        active_role_id.set(None);
                                        active_permissions.set(Vec::new());
                                    } else {
                                        active_role_id.set(Some(role.id.clone()));
                                        active_permissions.set(role.permissions.clone());
                                        perm_search.set(String::new());
                                    }
                                }
                            },
                            span { "{role.title}" }
                            if let Some(alias) = role.alias.as_deref() {
                                span { class: "badge", "{alias}" }
                            }
                            span {
                                class: if role.status == "Active" { "badge badge-active" } else { "badge badge-inactive" },
                                "{role.status}"
                            }
                        }

                        if active_role_id() == Some(role.id.clone()) {
                            div {
                                class: "accordion-body",
                                Input {
                                    class: "search",
                                    placeholder: "Search permissions",
                                    value: perm_search(),
                                    oninput: move |evt: FormEvent| perm_search.set(evt.value()),
                                }
                                ul {
                                    class: "perm-list",
                                    for permission in visible_permissions.clone() {
                                        li {
                                            key: "{permission.id}",
                                            label {
                                                class: "perm-row",
                                                input {
                                                    r#type: "checkbox",
                                                    checked: active_permissions()
                                                        .iter()
                                                        .any(|p| p.id == permission.id),
                                                    onchange: {
                                                        let permission = permission.clone();
                                                        move |_| {
                                                            let granted = active_permissions()
                                                                .iter()
                                                                .any(|p| p.id == permission.id);
                                                            let action = if granted {
                                                                ToggleAction::Remove
                                                            } else {
                                                                ToggleAction::Add
                                                            };
                                                            pending.set(Some((action, permission.clone())));
                                                        }
                                                    },
                                                }
                                                "{permission.permission_name}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some((action, permission)) = pending() {
                ConfirmDialog {
                    title: match action {
                        ToggleAction::Add => "Grant permission".to_string(),
                        ToggleAction::Remove => "Revoke permission".to_string(),
                    },
                    message: match action {
                        ToggleAction::Add => {
                            format!("Grant {} to this role?", permission.permission_name)
                        }
                        ToggleAction::Remove => {
                            format!("Revoke {} from this role?", permission.permission_name)
                        }
                    },
                    destructive: action == ToggleAction::Remove,
                    on_confirm: {
                        let permission = permission.clone();
                        move |_| {
                            let Some(role_id) = active_role_id() else {
                                pending.set(None);
                                return;
                            };
                            let permission = permission.clone();
                            spawn(async move {
                                loading.set(true);
                                let ids = [permission.id.clone()];
                                let result = match action {
                                    ToggleAction::Add => {
                                        api::add_role_permissions(&role_id, &ids).await
                                    }
                                    ToggleAction::Remove => {
                                        api::remove_role_permissions(&role_id, &ids).await
                                    }
                                };
                                match result {
                                    Ok(()) => {
                                        apply_permission_toggle(
                                            &mut active_permissions.write(),
                                            action,
                                            &permission,
                                        );
                                        // Keep the catalog copy in sync for the
                                        // next time this role is opened.
                                        if let Some(entry) = roles
                                            .write()
                                            .iter_mut()
                                            .find(|r| r.id == role_id)
                                        {
                                            apply_permission_toggle(
                                                &mut entry.permissions,
                                                action,
                                                &permission,
                                            );
                                        }
                                        toast.success(
                                            "Role permissions updated".to_string(),
                                            ToastOptions::new(),
                                        );
                                    }
                                    Err(err) => {
                                        toast.error(err.to_string(), ToastOptions::new())
                                    }
                                }
                                loading.set(false);
                                pending.set(None);
                            });
                        }
                    },
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}

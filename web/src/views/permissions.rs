//! Read-only permission catalog. Permissions are seeded server-side; this
//! screen only lists them with their status.

use api::Permission;
use dioxus::prelude::*;
use ui::components::{use_loading, use_toast, Input, ToastOptions};
use ui::use_session;

use super::{apply_guard, perm};

#[component]
pub fn Permissions() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut loading = use_loading();

    let mut permissions = use_signal(Vec::<Permission>::new);
    let mut search = use_signal(String::new);

    use_effect(move || {
        let state = session();
        if !apply_guard(&state, Some(perm::VIEW_PERMISSIONS), nav) {
            return;
        }
        spawn(async move {
            loading.set(true);
            match api::view_permissions().await {
                Ok(list) => permissions.set(list),
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            loading.set(false);
        });
    });

    let query = search().to_lowercase();
    let visible: Vec<Permission> = permissions()
        .into_iter()
        .filter(|p| query.is_empty() || p.permission_name.to_lowercase().contains(&query))
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Permissions" }
                Input {
                    class: "search",
                    placeholder: "Search permissions",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Permission" }
                        th { "Status" }
                    }
                }
                tbody {
                    for permission in visible {
                        tr {
                            key: "{permission.id}",
                            td { "{permission.permission_name}" }
                            td {
                                span {
                                    class: if permission.status == "Active" { "badge badge-active" } else { "badge badge-inactive" },
                                    "{permission.status}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

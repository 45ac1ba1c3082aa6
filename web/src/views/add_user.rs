//! Account creation form. The role picker is populated from the role
//! catalog; all checks here are advisory and the backend revalidates.

use api::{validate, Role};
use dioxus::prelude::*;
use ui::components::{
    use_loading, use_toast, Button, ButtonVariant, Input, Label, Select, ToastOptions,
};
use ui::use_session;

use super::{apply_guard, perm};

#[component]
pub fn AddUser() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut loading = use_loading();

    let mut roles = use_signal(Vec::<Role>::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role_id = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        let state = session();
        if !apply_guard(&state, Some(perm::ADD_USER), nav) {
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
        let n = name().trim().to_string();
        let e = email().trim().to_string();
        let p = password();

        if n.is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        if !validate::is_valid_email(&e) {
            error.set(Some("Email address is invalid".to_string()));
            return;
        }
        if p.len() < 6 {
            error.set(Some("Password must be at least 6 characters".to_string()));
            return;
        }
        if role_id().is_empty() {
            error.set(Some("Select a role".to_string()));
            return;
        }

        spawn(async move {
            submitting.set(true);
            loading.set(true);
            match api::create_user(&n, &e, &p, &role_id()).await {
                Ok(()) => {
                    toast.success("User created".to_string(), ToastOptions::new());
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    role_id.set(String::new());
                }
                Err(err) => toast.error(err.to_string(), ToastOptions::new()),
            }
            loading.set(false);
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Add User" }
            }

            form {
                class: "form-card",
                onsubmit: handle_submit,

                Label { html_for: "user-name", "Name" }
                Input {
                    id: "user-name",
                    placeholder: "Full name",
                    value: name(),
                    oninput: move |evt: FormEvent| {
                        name.set(evt.value());
                        error.set(None);
                    },
                }

                Label { html_for: "user-email", "Email" }
                Input {
                    id: "user-email",
                    r#type: "email",
                    placeholder: "Email address",
                    value: email(),
                    oninput: move |evt: FormEvent| {
                        email.set(evt.value());
                        error.set(None);
                    },
                }

                Label { html_for: "user-password", "Password" }
                Input {
                    id: "user-password",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| {
                        password.set(evt.value());
                        error.set(None);
                    },
                }

                Label { html_for: "user-role", "Role" }
                Select {
                    id: "user-role",
                    value: role_id(),
                    onchange: move |evt: FormEvent| {
                        role_id.set(evt.value());
                        error.set(None);
                    },
                    option { value: "", "Select a role" }
                    for role in roles() {
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

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: submitting(),
                    "Create User"
                }
            }
        }
    }
}

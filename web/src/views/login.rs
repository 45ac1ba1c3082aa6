//! Login screen: email/password form with inline validation, then the
//! session endpoints. The login payload omits the permission set, so a
//! follow-up `get-user` call pulls the full identity before navigating.

use api::{validate, Session};
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Input, ToastOptions};
use ui::{use_session, SessionState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let toast = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut show_password = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    // Already signed in: straight to the landing screen.
    if !session().loading && session().session.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            email_error.set(None);
            password_error.set(None);

            let e = email().trim().to_string();
            let p = password();

            let mut valid = true;
            if e.is_empty() {
                email_error.set(Some("Email is required".to_string()));
                valid = false;
            } else if !validate::is_valid_email(&e) {
                email_error.set(Some("Email address is invalid".to_string()));
                valid = false;
            }
            if p.is_empty() {
                password_error.set(Some("Password is required".to_string()));
                valid = false;
            }
            if !valid {
                return;
            }

            submitting.set(true);
            match api::login(&e, &p).await {
                Ok(auth) => {
                    api::storage::store_token(&auth.token);
                    // The login payload has no permissions; fetch the full
                    // identity now that the token is persisted.
                    let restored = match api::get_current_user().await {
                        Ok(full) => {
                            api::storage::store_token(&full.token);
                            Session::from_auth(full)
                        }
                        Err(err) => {
                            tracing::warn!("post-login identity fetch failed: {err}");
                            Session::from_auth(auth)
                        }
                    };
                    session.set(SessionState {
                        session: Some(restored),
                        loading: false,
                    });
                    toast.success("Login successful".to_string(), ToastOptions::new());
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    submitting.set(false);
                    toast.error(err.to_string(), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",
                h1 { "Admin Console" }
                p { class: "login-subtitle", "Log in to your account" }

                form {
                    onsubmit: handle_submit,
                    class: "login-form",

                    Input {
                        r#type: "email",
                        placeholder: "Email Address",
                        value: email(),
                        oninput: move |evt: FormEvent| {
                            email.set(evt.value());
                            email_error.set(None);
                        },
                    }
                    if let Some(err) = email_error() {
                        p { class: "field-error", "{err}" }
                    }

                    div {
                        class: "password-row",
                        Input {
                            r#type: if show_password() { "text" } else { "password" },
                            placeholder: "Password",
                            value: password(),
                            oninput: move |evt: FormEvent| {
                                password.set(evt.value());
                                password_error.set(None);
                            },
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_password.set(!show_password()),
                            if show_password() { "Hide" } else { "Show" }
                        }
                    }
                    if let Some(err) = password_error() {
                        p { class: "field-error", "{err}" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Logging in..." } else { "Log In" }
                    }
                }
            }
        }
    }
}

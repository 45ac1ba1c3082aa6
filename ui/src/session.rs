//! Session context and page-guard decisions.
//!
//! [`SessionProvider`] wraps the app and runs the bootstrap once per
//! top-level mount: read the persisted token, fetch the current user through
//! the gateway, and apply the outcome. The context signal is the only
//! process-wide session state; the login and logout flows are its only other
//! writers.

use api::session::BootstrapOutcome;
use api::Session;
use dioxus::prelude::*;

/// Session state for the application. `loading` is the bootstrap PENDING
/// flag: while it is set, consumers must render a placeholder and take no
/// guard action.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn has_permission(&self, tag: &str) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.has_permission(tag))
    }

    /// The granted permission tags, empty when no session is present.
    pub fn permission_tags(&self) -> Vec<String> {
        self.session
            .as_ref()
            .map(|s| {
                s.permissions
                    .iter()
                    .map(|p| p.permission_name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session context and runs the bootstrap.
/// Wrap the app with this component above the router.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    // Restore the session from the persisted token on mount. Failure still
    // completes the bootstrap with an empty session so the UI cannot hang;
    // the page guards redirect before any protected fetch happens.
    let _ = use_resource(move || async move {
        let token = api::storage::load_token();
        let fetched = match token {
            Some(_) => Some(api::get_current_user().await),
            None => None,
        };
        match api::session::resolve_bootstrap(token.as_deref(), fetched) {
            BootstrapOutcome::RedirectToLogin => {
                tracing::debug!("no persisted token, bootstrap done without a session");
                state.set(SessionState {
                    session: None,
                    loading: false,
                });
            }
            BootstrapOutcome::Ready(session) => {
                tracing::debug!(restored = session.is_some(), "session bootstrap done");
                if let Some(ref s) = session {
                    api::storage::store_token(&s.token);
                }
                state.set(SessionState {
                    session,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// What a protected screen should do, evaluated after every session change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Bootstrap still pending: neither fetch nor redirect.
    Wait,
    /// Bootstrap done without a session: back to the login screen.
    RedirectLogin,
    /// Session present but the required permission is missing: back to the
    /// default landing screen.
    RedirectHome,
    /// Render and fetch.
    Allow,
}

/// Evaluate a screen's guard. `required` is `None` for screens that only
/// need an authenticated session.
pub fn evaluate_guard(state: &SessionState, required: Option<&str>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if state.session.is_none() {
        return GuardDecision::RedirectLogin;
    }
    match required {
        Some(tag) if !state.has_permission(tag) => GuardDecision::RedirectHome,
        _ => GuardDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Permission;

    fn session_with(tags: &[&str]) -> SessionState {
        SessionState {
            session: Some(Session {
                user_id: "u1".to_string(),
                user_name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                role: "Super Admin".to_string(),
                token: "t1".to_string(),
                permissions: tags
                    .iter()
                    .map(|t| Permission {
                        id: format!("p-{t}"),
                        permission_name: t.to_string(),
                        status: "Active".to_string(),
                        created_at: None,
                        updated_at: None,
                    })
                    .collect(),
            }),
            loading: false,
        }
    }

    #[test]
    fn pending_bootstrap_waits() {
        let state = SessionState::default();
        assert_eq!(
            evaluate_guard(&state, Some("VIEW-USER")),
            GuardDecision::Wait
        );
    }

    #[test]
    fn done_without_session_redirects_to_login() {
        let state = SessionState {
            session: None,
            loading: false,
        };
        assert_eq!(
            evaluate_guard(&state, Some("VIEW-USER")),
            GuardDecision::RedirectLogin
        );
        assert_eq!(evaluate_guard(&state, None), GuardDecision::RedirectLogin);
    }

    #[test]
    fn missing_permission_redirects_home() {
        let state = session_with(&["VIEW-ROLE"]);
        assert_eq!(
            evaluate_guard(&state, Some("VIEW-USER")),
            GuardDecision::RedirectHome
        );
    }

    #[test]
    fn granted_permission_allows() {
        let state = session_with(&["VIEW-USER"]);
        assert_eq!(
            evaluate_guard(&state, Some("VIEW-USER")),
            GuardDecision::Allow
        );
        assert_eq!(evaluate_guard(&state, None), GuardDecision::Allow);
    }
}

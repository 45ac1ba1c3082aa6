//! Session types and the bootstrap state machine.
//!
//! The bootstrap runs once per top-level page load: read the persisted
//! token, fetch the current user through the gateway, and either restore the
//! session or deliberately fail open to an empty one so the UI never hangs
//! on a dead backend. [`resolve_bootstrap`] is the pure core of that flow;
//! the UI provider drives it and applies the outcome.

use serde::Deserialize;

use crate::client::ApiError;
use crate::models::Permission;

/// The `user` object nested in `/auth/login` and `/auth/get-user` payloads.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub role: String,
    /// Login responses omit the permission set; get-user includes it.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// `data` payload of both session endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthData {
    pub user: AuthUser,
    pub token: String,
}

/// The authenticated identity and its grant set. Owned by the top-level
/// session context; populated only by bootstrap or login, cleared on logout.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub role: String,
    pub token: String,
    pub permissions: Vec<Permission>,
}

impl Session {
    pub fn from_auth(auth: AuthData) -> Self {
        Session {
            user_id: auth.user.user_id,
            user_name: auth.user.user_name,
            email: auth.user.user_email,
            role: auth.user.role,
            token: auth.token,
            permissions: auth.user.permissions,
        }
    }

    /// Case-sensitive set membership over the granted permission tags.
    pub fn has_permission(&self, tag: &str) -> bool {
        self.permissions.iter().any(|p| p.permission_name == tag)
    }
}

/// Result of the PENDING -> DONE bootstrap transition.
#[derive(Clone, Debug, PartialEq)]
pub enum BootstrapOutcome {
    /// No persisted token: DONE is never reached with data, go to login.
    RedirectToLogin,
    /// DONE. `None` means the fetch failed and the session stays empty
    /// (fail-open-to-empty); page guards catch it and redirect.
    Ready(Option<Session>),
}

/// Collapse the persisted token and the optional fetch result into the
/// bootstrap outcome. `fetched` is `None` when no fetch was attempted.
pub fn resolve_bootstrap(
    token: Option<&str>,
    fetched: Option<Result<AuthData, ApiError>>,
) -> BootstrapOutcome {
    if token.is_none() {
        return BootstrapOutcome::RedirectToLogin;
    }
    match fetched {
        Some(Ok(auth)) => BootstrapOutcome::Ready(Some(Session::from_auth(auth))),
        Some(Err(err)) => {
            tracing::warn!("session restore failed: {err}");
            BootstrapOutcome::Ready(None)
        }
        None => BootstrapOutcome::Ready(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_data(token: &str) -> AuthData {
        serde_json::from_str(&format!(
            r#"{{
                "user": {{
                    "userId": "u1",
                    "userName": "Asha",
                    "userEmail": "asha@example.com",
                    "role": "Super Admin",
                    "permissions": [
                        {{ "id": "p1", "permissionName": "VIEW-ROLE", "status": "Active" }}
                    ]
                }},
                "token": "{token}"
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn no_token_redirects_to_login_without_a_session() {
        assert_eq!(
            resolve_bootstrap(None, None),
            BootstrapOutcome::RedirectToLogin
        );
    }

    #[test]
    fn successful_fetch_populates_session_from_nested_user() {
        let outcome = resolve_bootstrap(Some("t1"), Some(Ok(auth_data("t2"))));
        let BootstrapOutcome::Ready(Some(session)) = outcome else {
            panic!("expected a populated session");
        };
        assert_eq!(session.user_id, "u1");
        assert_eq!(session.user_name, "Asha");
        assert_eq!(session.email, "asha@example.com");
        assert_eq!(session.role, "Super Admin");
        // The fresh token from the response replaces the persisted one.
        assert_eq!(session.token, "t2");
        assert!(session.has_permission("VIEW-ROLE"));
    }

    #[test]
    fn failed_fetch_still_completes_with_empty_session() {
        let err = ApiError::Api {
            status_code: 401,
            message: "invalid token".to_string(),
        };
        assert_eq!(
            resolve_bootstrap(Some("t1"), Some(Err(err))),
            BootstrapOutcome::Ready(None)
        );
    }

    #[test]
    fn permission_match_is_case_sensitive() {
        let session = Session::from_auth(auth_data("t"));
        assert!(session.has_permission("VIEW-ROLE"));
        assert!(!session.has_permission("view-role"));
    }
}

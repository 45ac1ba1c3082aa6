//! Advisory client-side validation, applied before any network call.
//! Authoritative validation is always server-side; these checks only catch
//! empty fields, malformed emails and duplicates against the
//! currently-loaded collection.

use crate::models::{Role, State};

/// Minimal email shape check: one `@` with a dotted domain after it.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Duplicate detection is case-insensitive: "admin" collides with "Admin"
/// even though permission tags elsewhere compare case-sensitively.
pub fn role_title_exists(roles: &[Role], title: &str) -> bool {
    roles
        .iter()
        .any(|role| role.title.eq_ignore_ascii_case(title))
}

pub fn role_alias_exists(roles: &[Role], alias: &str) -> bool {
    roles.iter().any(|role| {
        role.alias
            .as_deref()
            .is_some_and(|a| a.eq_ignore_ascii_case(alias))
    })
}

pub fn state_title_exists(states: &[State], title: &str) -> bool {
    states
        .iter()
        .any(|state| state.title.eq_ignore_ascii_case(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(title: &str, alias: Option<&str>) -> Role {
        Role {
            id: format!("r-{title}"),
            title: title.to_string(),
            alias: alias.map(str::to_string),
            status: "Active".to_string(),
            permissions: Vec::new(),
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("a.b@sub.example.org"));
        assert!(!is_valid_email("asha"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn duplicate_role_title_is_case_insensitive() {
        let roles = vec![role("Admin", None)];
        assert!(role_title_exists(&roles, "admin"));
        assert!(role_title_exists(&roles, "ADMIN"));
        assert!(!role_title_exists(&roles, "Operator"));
    }

    #[test]
    fn duplicate_alias_ignores_roles_without_one() {
        let roles = vec![role("Admin", Some("SA")), role("Operator", None)];
        assert!(role_alias_exists(&roles, "sa"));
        assert!(!role_alias_exists(&roles, "OP"));
    }

    #[test]
    fn duplicate_state_title_is_case_insensitive() {
        let states = vec![State {
            id: "s1".to_string(),
            title: "Kerala".to_string(),
            districts: Vec::new(),
        }];
        assert!(state_title_exists(&states, "kerala"));
        assert!(!state_title_exists(&states, "Goa"));
    }
}

//! # Domain models for the admin console
//!
//! Wire types for everything the backend manages: permissions, roles, users
//! and the state/district geography. All of them are `camelCase` on the wire
//! and derive `Serialize + Deserialize` so they can cross the gateway
//! boundary unchanged.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Permission`] | One grantable capability, identified by `id` and matched by `permission_name`. |
//! | [`Role`] | A named bundle of permissions assignable to a user. |
//! | [`User`] | An account with exactly one role and a tri-state [`UserStatus`]. |
//! | [`State`] | A top-level geography entry owning its districts. |
//! | [`District`] | A named subdivision of a state; no independent top-level listing. |

use serde::{Deserialize, Serialize};

/// One grantable capability. `permission_name` is the tag matched
/// case-sensitively against menu entries and page guards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: String,
    pub permission_name: String,
    /// "Active" or "Inactive"; toggled server-side only.
    #[serde(default)]
    pub status: String,
    /// Absent when the permission arrives embedded in a role.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A role aggregates zero or more permissions. Membership is managed through
/// the add-perm/remove-perm endpoints, never by editing the role directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub status: String,
    /// Empty when the role arrives as a user's role reference.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// Account status. The select on the users screen cycles through all three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Hold,
    Suspended,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Hold, UserStatus::Suspended];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Hold => "Hold",
            UserStatus::Suspended => "Suspended",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(UserStatus::Active),
            "Hold" => Ok(UserStatus::Hold),
            "Suspended" => Ok(UserStatus::Suspended),
            _ => Err(()),
        }
    }
}

/// A managed account. Always carries exactly one role reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub unique_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

/// A state owns its districts in insertion order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub districts: Vec<District>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: String,
    pub name: String,
}

/// Direction of a role-permission membership change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Add,
    Remove,
}

/// Patch a role's local permission list after the server confirmed an
/// add-perm/remove-perm call, so the accordion reflects the change without a
/// re-fetch. Adding an already-present permission is a no-op.
pub fn apply_permission_toggle(
    permissions: &mut Vec<Permission>,
    action: ToggleAction,
    permission: &Permission,
) {
    match action {
        ToggleAction::Add => {
            if !permissions.iter().any(|p| p.id == permission.id) {
                permissions.push(permission.clone());
            }
        }
        ToggleAction::Remove => {
            permissions.retain(|p| p.id != permission.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(id: &str, name: &str) -> Permission {
        Permission {
            id: id.to_string(),
            permission_name: name.to_string(),
            status: "Active".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn toggle_add_inserts_permission_locally() {
        let mut perms = vec![perm("p1", "VIEW-ROLE")];
        apply_permission_toggle(&mut perms, ToggleAction::Add, &perm("p2", "ADD-ROLE"));
        assert!(perms.iter().any(|p| p.id == "p2"));
        assert_eq!(perms.len(), 2);
    }

    #[test]
    fn toggle_add_is_idempotent_per_id() {
        let mut perms = vec![perm("p1", "VIEW-ROLE")];
        apply_permission_toggle(&mut perms, ToggleAction::Add, &perm("p1", "VIEW-ROLE"));
        assert_eq!(perms.len(), 1);
    }

    #[test]
    fn toggle_remove_drops_permission_locally() {
        let mut perms = vec![perm("p1", "VIEW-ROLE"), perm("p2", "ADD-ROLE")];
        apply_permission_toggle(&mut perms, ToggleAction::Remove, &perm("p1", "VIEW-ROLE"));
        assert_eq!(perms.len(), 1);
        assert_eq!(perms[0].id, "p2");
    }

    #[test]
    fn user_deserializes_with_embedded_role() {
        let json = r#"{
            "id": "u1",
            "uniqueId": "VS-0001",
            "name": "Asha",
            "email": "asha@example.com",
            "role": { "id": "r1", "title": "Admin" },
            "status": "Hold"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.unique_id, "VS-0001");
        assert_eq!(user.role.title, "Admin");
        assert!(user.role.permissions.is_empty());
        assert_eq!(user.status, UserStatus::Hold);
    }

    #[test]
    fn user_status_round_trips_through_str() {
        for status in UserStatus::ALL {
            assert_eq!(status.as_str().parse::<UserStatus>(), Ok(status));
        }
        assert!("Inactive".parse::<UserStatus>().is_err());
    }
}

//! # Gateway client and shared types for the admin console
//!
//! Everything the screens need to talk to the backend: the gateway wrapper,
//! the endpoint catalog, the wire models, session bootstrap logic, token
//! persistence and advisory validation. No UI dependency, so all of it
//! compiles natively and is unit-testable.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | HTTP gateway: origin config, envelope parsing, typed [`ApiError`] |
//! | [`endpoints`] | Backend path constants |
//! | [`models`] | Permissions, roles, users, states, districts |
//! | [`session`] | `Session`, `AuthData`, the bootstrap state machine |
//! | [`storage`] | Token persistence (local storage on web) |
//! | [`validate`] | Advisory pre-submission checks |
//!
//! Every public `async fn` below wraps exactly one backend operation with a
//! typed request body and payload, so callers never touch raw envelopes.

use serde::Deserialize;
use serde_json::json;

pub mod client;
pub mod endpoints;
pub mod models;
pub mod session;
pub mod storage;
pub mod validate;

pub use client::{set_backend_url, ApiError, Envelope, Method};
pub use models::{
    apply_permission_toggle, District, Permission, Role, State, ToggleAction, User, UserStatus,
};
pub use session::{AuthData, BootstrapOutcome, Session};

#[derive(Deserialize)]
struct RolesData {
    roles: Vec<Role>,
}

#[derive(Deserialize)]
struct PermissionsData {
    permissions: Vec<Permission>,
}

#[derive(Deserialize)]
struct UsersData {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct StatesData {
    states: Vec<State>,
}

#[derive(Deserialize)]
struct DistrictsData {
    districts: Vec<District>,
}

fn require_data<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    envelope.data.ok_or(ApiError::Api {
        status_code: 200,
        message: "response is missing its data payload".to_string(),
    })
}

/// Fire a mutation whose success carries no payload worth keeping.
async fn call_unit(
    method: Method,
    path: &str,
    body: serde_json::Value,
) -> Result<(), ApiError> {
    client::call::<serde_json::Value>(method, path, Some(body)).await?;
    Ok(())
}

// --- session ---------------------------------------------------------------

pub async fn login(email: &str, password: &str) -> Result<AuthData, ApiError> {
    let envelope = client::call::<AuthData>(
        Method::POST,
        endpoints::LOGIN,
        Some(json!({ "email": email, "password": password })),
    )
    .await?;
    require_data(envelope)
}

/// Fetch the identity behind the persisted token. Used by the bootstrap on
/// every top-level page load.
pub async fn get_current_user() -> Result<AuthData, ApiError> {
    let envelope = client::call::<AuthData>(Method::GET, endpoints::GET_USER, None).await?;
    require_data(envelope)
}

// --- roles -----------------------------------------------------------------

pub async fn view_roles() -> Result<Vec<Role>, ApiError> {
    let envelope = client::call::<RolesData>(Method::GET, endpoints::VIEW_ROLES, None).await?;
    Ok(require_data(envelope)?.roles)
}

pub async fn add_role(title: &str, alias: Option<&str>) -> Result<(), ApiError> {
    call_unit(
        Method::POST,
        endpoints::ADD_ROLE,
        json!({ "title": title, "alias": alias }),
    )
    .await
}

pub async fn edit_role(role_id: &str, title: &str, alias: Option<&str>) -> Result<(), ApiError> {
    call_unit(
        Method::PUT,
        endpoints::EDIT_ROLE,
        json!({ "roleId": role_id, "title": title, "alias": alias }),
    )
    .await
}

pub async fn delete_role(role_id: &str) -> Result<(), ApiError> {
    call_unit(
        Method::POST,
        endpoints::DELETE_ROLE,
        json!({ "roleId": role_id }),
    )
    .await
}

pub async fn toggle_role_status(role_id: &str) -> Result<(), ApiError> {
    call_unit(
        Method::PUT,
        endpoints::ROLE_STATUS,
        json!({ "roleId": role_id }),
    )
    .await
}

pub async fn add_role_permissions(role_id: &str, permission_ids: &[String]) -> Result<(), ApiError> {
    call_unit(
        Method::POST,
        endpoints::ADD_ROLE_PERM,
        json!({ "roleId": role_id, "permissionsArray": permission_ids }),
    )
    .await
}

pub async fn remove_role_permissions(
    role_id: &str,
    permission_ids: &[String],
) -> Result<(), ApiError> {
    call_unit(
        Method::POST,
        endpoints::REMOVE_ROLE_PERM,
        json!({ "roleId": role_id, "permissionsArray": permission_ids }),
    )
    .await
}

// --- permissions -----------------------------------------------------------

pub async fn view_permissions() -> Result<Vec<Permission>, ApiError> {
    let envelope =
        client::call::<PermissionsData>(Method::GET, endpoints::VIEW_PERMISSIONS, None).await?;
    Ok(require_data(envelope)?.permissions)
}

// --- users -----------------------------------------------------------------

pub async fn view_users() -> Result<Vec<User>, ApiError> {
    let envelope = client::call::<UsersData>(Method::GET, endpoints::VIEW_USERS, None).await?;
    Ok(require_data(envelope)?.users)
}

pub async fn create_user(
    name: &str,
    email: &str,
    password: &str,
    role_id: &str,
) -> Result<(), ApiError> {
    call_unit(
        Method::POST,
        endpoints::CREATE_USER,
        json!({ "name": name, "email": email, "password": password, "role": role_id }),
    )
    .await
}

pub async fn edit_user(
    id: &str,
    name: &str,
    email: &str,
    password: &str,
    role_id: &str,
) -> Result<(), ApiError> {
    call_unit(
        Method::PUT,
        endpoints::EDIT_USER,
        json!({ "id": id, "name": name, "email": email, "password": password, "role": role_id }),
    )
    .await
}

pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    call_unit(Method::PUT, endpoints::DELETE_USER, json!({ "id": id })).await
}

pub async fn set_user_status(id: &str, status: UserStatus) -> Result<(), ApiError> {
    call_unit(
        Method::PUT,
        endpoints::USER_STATUS,
        json!({ "id": id, "status": status.as_str() }),
    )
    .await
}

// --- states & districts ----------------------------------------------------

pub async fn view_states() -> Result<Vec<State>, ApiError> {
    let envelope = client::call::<StatesData>(Method::GET, endpoints::VIEW_STATES, None).await?;
    Ok(require_data(envelope)?.states)
}

pub async fn add_state(state_name: &str, districts: &[String]) -> Result<(), ApiError> {
    call_unit(
        Method::POST,
        endpoints::ADD_STATE,
        json!({ "stateName": state_name, "districts": districts }),
    )
    .await
}

pub async fn edit_state(id: &str, state_name: &str) -> Result<(), ApiError> {
    call_unit(
        Method::PUT,
        endpoints::EDIT_STATE,
        json!({ "id": id, "stateName": state_name }),
    )
    .await
}

pub async fn delete_state(id: &str) -> Result<(), ApiError> {
    call_unit(Method::PUT, endpoints::DELETE_STATE, json!({ "id": id })).await
}

pub async fn view_districts(state_id: &str) -> Result<Vec<District>, ApiError> {
    let envelope = client::call::<DistrictsData>(
        Method::POST,
        endpoints::VIEW_DISTRICTS,
        Some(json!({ "stateId": state_id })),
    )
    .await?;
    Ok(require_data(envelope)?.districts)
}

pub async fn add_districts(state_id: &str, districts: &[String]) -> Result<(), ApiError> {
    call_unit(
        Method::POST,
        endpoints::ADD_DISTRICT,
        json!({ "stateId": state_id, "districts": districts }),
    )
    .await
}

pub async fn edit_district(
    state_id: &str,
    district_id: &str,
    district_name: &str,
) -> Result<(), ApiError> {
    call_unit(
        Method::PUT,
        endpoints::EDIT_DISTRICT,
        json!({ "stateId": state_id, "districtId": district_id, "districtName": district_name }),
    )
    .await
}

pub async fn delete_district(state_id: &str, district_id: &str) -> Result<(), ApiError> {
    call_unit(
        Method::PUT,
        endpoints::DELETE_DISTRICT,
        json!({ "stateId": state_id, "districtId": district_id }),
    )
    .await
}

#[cfg(test)]
mod tests {
    // The UI crates import these through the crate root.
    #[test]
    fn permission_toggle_is_reachable_from_the_crate_root() {
        let permission = crate::Permission {
            id: "p1".to_string(),
            permission_name: "VIEW-ROLE".to_string(),
            status: "Active".to_string(),
            created_at: None,
            updated_at: None,
        };
        let mut perms = Vec::new();
        crate::apply_permission_toggle(&mut perms, crate::ToggleAction::Add, &permission);
        assert_eq!(perms.len(), 1);
    }
}

//! Backend endpoint catalog. Paths are suffixes appended to the configured
//! origin; the HTTP method lives with the typed wrapper in `lib.rs`.

pub const LOGIN: &str = "/auth/login";
pub const GET_USER: &str = "/auth/get-user";

pub const ADD_ROLE: &str = "/role/add-role";
pub const VIEW_ROLES: &str = "/role/view-roles";
pub const EDIT_ROLE: &str = "/role/edit-role";
pub const DELETE_ROLE: &str = "/role/delete-role";
pub const ROLE_STATUS: &str = "/role/status";
pub const ADD_ROLE_PERM: &str = "/role/add-perm";
pub const REMOVE_ROLE_PERM: &str = "/role/remove-perm";

pub const VIEW_PERMISSIONS: &str = "/permission/view-permissions";

pub const CREATE_USER: &str = "/user/create-user";
pub const VIEW_USERS: &str = "/user/view-users";
pub const EDIT_USER: &str = "/user/edit-user";
pub const DELETE_USER: &str = "/user/delete-user";
pub const USER_STATUS: &str = "/user/status";

pub const VIEW_STATES: &str = "/state/view-states";
pub const ADD_STATE: &str = "/state/add-state";
pub const EDIT_STATE: &str = "/state/edit-state";
pub const DELETE_STATE: &str = "/state/delete-state";
pub const VIEW_DISTRICTS: &str = "/state/view-districts";
pub const ADD_DISTRICT: &str = "/state/add-district";
pub const EDIT_DISTRICT: &str = "/state/edit-district";
pub const DELETE_DISTRICT: &str = "/state/delete-district";

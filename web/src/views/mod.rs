mod shell;
pub use shell::Shell;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod users;
pub use users::Users;

mod add_user;
pub use add_user::AddUser;

mod roles;
pub use roles::Roles;

mod add_role;
pub use add_role::AddRole;

mod permissions;
pub use permissions::Permissions;

mod states;
pub use states::States;

mod add_state;
pub use add_state::AddState;

mod add_district;
pub use add_district::AddDistrict;

mod not_found;
pub use not_found::NotFound;

use dioxus::prelude::*;
use ui::{GuardDecision, SessionState};

use crate::Route;

/// Permission tags the backend grants and the screens/menu require.
pub(crate) mod perm {
    pub const ADD_USER: &str = "ADD-USER";
    pub const VIEW_USER: &str = "VIEW-USER";
    pub const EDIT_USER: &str = "EDIT-USER";
    pub const DELETE_USER: &str = "DELETE-USER";
    pub const ADD_ROLE: &str = "ADD-ROLE";
    pub const VIEW_ROLE: &str = "VIEW-ROLE";
    pub const VIEW_PERMISSIONS: &str = "VIEW-PERMISSIONS";
    pub const ADD_STATE: &str = "ADD-STATE";
    pub const VIEW_STATE: &str = "VIEW-STATE";
    pub const EDIT_STATE: &str = "EDIT-STATE";
    pub const DELETE_STATE: &str = "DELETE-STATE";
    pub const ADD_DISTRICT: &str = "ADD-DISTRICT";
    pub const EDIT_DISTRICT: &str = "EDIT-DISTRICT";
    pub const DELETE_DISTRICT: &str = "DELETE-DISTRICT";
}

/// Apply a screen's guard decision. Returns `true` when the screen may
/// fetch and render; redirects have already been issued otherwise.
pub(crate) fn apply_guard(state: &SessionState, required: Option<&str>, nav: Navigator) -> bool {
    match ui::evaluate_guard(state, required) {
        GuardDecision::Wait => false,
        GuardDecision::RedirectLogin => {
            nav.replace(Route::Login {});
            false
        }
        GuardDecision::RedirectHome => {
            nav.replace(Route::Dashboard {});
            false
        }
        GuardDecision::Allow => true,
    }
}

//! This crate contains all shared UI for the workspace: form controls,
//! toast/modal/loading chrome, the session provider that runs the bootstrap,
//! and the permission-gated sidebar menu.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod menu;
pub use menu::{filter_menu, open_group_for_route, MenuGroup, MenuIcon, MenuLeaf, MenuNode};

mod session;
pub use session::{evaluate_guard, use_session, GuardDecision, SessionProvider, SessionState};

mod sidebar;
pub use sidebar::AppSidebar;

//! Layout for every protected screen: sidebar on the left, the routed
//! screen in the outlet. The menu is re-filtered against the session's
//! permission set on every render.

use dioxus::prelude::*;

use ui::{filter_menu, use_session, AppSidebar, MenuGroup, MenuIcon, MenuLeaf, MenuNode,
    SessionState};

use super::perm;
use crate::Route;

fn main_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::Leaf(MenuLeaf {
            id: 0,
            label: "Dashboard".to_string(),
            route: "/dashboard".to_string(),
            icon: Some(MenuIcon::Dashboard),
            permission: None,
        }),
        MenuNode::Group(MenuGroup {
            id: 1,
            label: "Users".to_string(),
            icon: Some(MenuIcon::Users),
            permission: None,
            children: vec![
                MenuNode::Leaf(MenuLeaf {
                    id: 4,
                    label: "Add User".to_string(),
                    route: "/add-user".to_string(),
                    icon: Some(MenuIcon::Add),
                    permission: Some(perm::ADD_USER.to_string()),
                }),
                MenuNode::Leaf(MenuLeaf {
                    id: 5,
                    label: "View Users".to_string(),
                    route: "/users".to_string(),
                    icon: Some(MenuIcon::View),
                    permission: Some(perm::VIEW_USER.to_string()),
                }),
            ],
        }),
        MenuNode::Group(MenuGroup {
            id: 2,
            label: "Roles".to_string(),
            icon: Some(MenuIcon::Roles),
            permission: None,
            children: vec![
                MenuNode::Leaf(MenuLeaf {
                    id: 6,
                    label: "Add Role".to_string(),
                    route: "/add-role".to_string(),
                    icon: Some(MenuIcon::Add),
                    permission: Some(perm::ADD_ROLE.to_string()),
                }),
                MenuNode::Leaf(MenuLeaf {
                    id: 7,
                    label: "View Roles".to_string(),
                    route: "/roles".to_string(),
                    icon: Some(MenuIcon::View),
                    permission: Some(perm::VIEW_ROLE.to_string()),
                }),
            ],
        }),
        MenuNode::Leaf(MenuLeaf {
            id: 3,
            label: "Permissions".to_string(),
            route: "/permissions".to_string(),
            icon: Some(MenuIcon::Permissions),
            permission: Some(perm::VIEW_PERMISSIONS.to_string()),
        }),
        MenuNode::Group(MenuGroup {
            id: 8,
            label: "States".to_string(),
            icon: Some(MenuIcon::States),
            permission: None,
            children: vec![
                MenuNode::Leaf(MenuLeaf {
                    id: 9,
                    label: "Add State".to_string(),
                    route: "/add-state".to_string(),
                    icon: Some(MenuIcon::Add),
                    permission: Some(perm::ADD_STATE.to_string()),
                }),
                MenuNode::Leaf(MenuLeaf {
                    id: 10,
                    label: "View States".to_string(),
                    route: "/states".to_string(),
                    icon: Some(MenuIcon::View),
                    permission: Some(perm::VIEW_STATE.to_string()),
                }),
                MenuNode::Leaf(MenuLeaf {
                    id: 11,
                    label: "Add District".to_string(),
                    route: "/add-district".to_string(),
                    icon: Some(MenuIcon::Add),
                    permission: Some(perm::ADD_DISTRICT.to_string()),
                }),
            ],
        }),
    ]
}

fn route_from_path(path: &str) -> Option<Route> {
    match path {
        "/dashboard" => Some(Route::Dashboard {}),
        "/users" => Some(Route::Users {}),
        "/add-user" => Some(Route::AddUser {}),
        "/roles" => Some(Route::Roles {}),
        "/add-role" => Some(Route::AddRole {}),
        "/permissions" => Some(Route::Permissions {}),
        "/states" => Some(Route::States {}),
        "/add-state" => Some(Route::AddState {}),
        "/add-district" => Some(Route::AddDistrict {}),
        _ => None,
    }
}

#[component]
pub fn Shell() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let route_path = use_route::<Route>().to_string();

    let state = session();
    let menu = filter_menu(&main_menu(), &state.permission_tags());

    rsx! {
        div {
            class: "app-shell",
            AppSidebar {
                menu: menu,
                active_route: route_path,
                role_label: state.session.as_ref().map(|s| s.role.clone()),
                user_name: state.session.as_ref().map(|s| s.user_name.clone()),
                loading: state.loading,
                on_navigate: move |path: String| {
                    if let Some(route) = route_from_path(&path) {
                        nav.push(route);
                    }
                },
                on_logout: move |_| {
                    api::storage::clear_token();
                    session.set(SessionState {
                        session: None,
                        loading: false,
                    });
                    nav.replace(Route::Login {});
                },
            }
            main {
                class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}

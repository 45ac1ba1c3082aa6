//! Application sidebar: brand header, the permission-filtered menu and the
//! logout action. Router-agnostic; the platform crate supplies navigation
//! callbacks and the already-filtered menu tree.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChevronDown, FaChevronRight, FaCirclePlus, FaClipboardUser, FaEye, FaHouse, FaMap,
    FaRightFromBracket, FaUserGear, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::menu::{open_group_for_route, MenuIcon, MenuNode};

fn menu_icon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Dashboard => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaHouse } },
        MenuIcon::Users => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaUsers } },
        MenuIcon::Roles => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaUserGear } },
        MenuIcon::Permissions => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaClipboardUser } },
        MenuIcon::States => rsx! { Icon { width: 16, height: 16, fill: "currentColor", icon: FaMap } },
        MenuIcon::Add => rsx! { Icon { width: 14, height: 14, fill: "currentColor", icon: FaCirclePlus } },
        MenuIcon::View => rsx! { Icon { width: 14, height: 14, fill: "currentColor", icon: FaEye } },
    }
}

/// Sidebar with the filtered menu. One group is open at a time, keyed by
/// node id; the open group follows the route until the user toggles one
/// manually, and the override resets on every route change.
#[component]
pub fn AppSidebar(
    menu: Vec<MenuNode>,
    active_route: ReadOnlySignal<String>,
    role_label: Option<String>,
    user_name: Option<String>,
    loading: bool,
    on_navigate: EventHandler<String>,
    on_logout: EventHandler<()>,
) -> Element {
    // None = derive from the route; Some(x) = user toggled.
    let mut override_open = use_signal(|| Option::<Option<usize>>::None);

    use_effect(move || {
        let _ = active_route();
        override_open.set(None);
    });

    let route = active_route();
    let open_id = override_open().unwrap_or_else(|| open_group_for_route(&menu, &route));

    rsx! {
        div {
            class: "sidebar",
            div {
                class: "sidebar-brand",
                h1 { "Admin Console" }
                if let Some(ref role) = role_label {
                    span { class: "sidebar-role", "{role}" }
                }
                if let Some(ref name) = user_name {
                    span { class: "sidebar-user", "{name}" }
                }
            }

            if loading {
                div {
                    class: "sidebar-menu",
                    for i in 0..5 {
                        div { key: "{i}", class: "menu-skeleton" }
                    }
                }
            } else {
                ul {
                    class: "sidebar-menu",
                    for node in menu.iter() {
                        li {
                            key: "{node.id()}",
                            {match node {
                                MenuNode::Leaf(leaf) => rsx! {
                                    div {
                                        class: if leaf.route == route { "menu-item active" } else { "menu-item" },
                                        onclick: {
                                            let target = leaf.route.clone();
                                            move |_| on_navigate.call(target.clone())
                                        },
                                        if let Some(icon) = leaf.icon {
                                            span { class: "menu-icon", {menu_icon(icon)} }
                                        }
                                        span { "{leaf.label}" }
                                    }
                                },
                                MenuNode::Group(group) => rsx! {
                                    div {
                                        class: if group.children.iter().any(|c| matches!(c, MenuNode::Leaf(l) if l.route == route)) {
                                            "menu-item menu-group active"
                                        } else {
                                            "menu-item menu-group"
                                        },
                                        onclick: {
                                            let id = group.id;
                                            move |_| {
                                                override_open.set(Some(if open_id == Some(id) { None } else { Some(id) }));
                                            }
                                        },
                                        if let Some(icon) = group.icon {
                                            span { class: "menu-icon", {menu_icon(icon)} }
                                        }
                                        span { "{group.label}" }
                                        span {
                                            class: "menu-chevron",
                                            if open_id == Some(group.id) {
                                                Icon { width: 12, height: 12, fill: "currentColor", icon: FaChevronDown }
                                            } else {
                                                Icon { width: 12, height: 12, fill: "currentColor", icon: FaChevronRight }
                                            }
                                        }
                                    }
                                    if open_id == Some(group.id) {
                                        ul {
                                            class: "submenu",
                                            for child in group.children.iter() {
                                                if let MenuNode::Leaf(leaf) = child {
                                                    li {
                                                        key: "{leaf.id}",
                                                        class: if leaf.route == route { "submenu-item active" } else { "submenu-item" },
                                                        onclick: {
                                                            let target = leaf.route.clone();
                                                            move |_| on_navigate.call(target.clone())
                                                        },
                                                        if let Some(icon) = leaf.icon {
                                                            span { class: "menu-icon", {menu_icon(icon)} }
                                                        }
                                                        span { "{leaf.label}" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                },
                            }}
                        }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "menu-item logout",
                    onclick: move |_| on_logout.call(()),
                    span { class: "menu-icon",
                        Icon { width: 16, height: 16, fill: "currentColor", icon: FaRightFromBracket }
                    }
                    span { "Logout" }
                }
            }
        }
    }
}

//! Navigation menu model and permission filtering.
//!
//! The menu is a typed recursive variant: a node is either a [`MenuLeaf`]
//! pointing at a route or a [`MenuGroup`] holding children. Each node may
//! carry a required-permission tag; [`filter_menu`] is a pure transform that
//! drops everything the granted set does not cover. It is recomputed on
//! every permission-set or route change, never cached.

/// Icon slot for a menu entry. The sidebar maps these to Font Awesome
/// glyphs; keeping an enum here leaves the menu data renderer-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Users,
    Roles,
    Permissions,
    States,
    Add,
    View,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuLeaf {
    pub id: usize,
    pub label: String,
    pub route: String,
    pub icon: Option<MenuIcon>,
    pub permission: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: usize,
    pub label: String,
    pub icon: Option<MenuIcon>,
    pub permission: Option<String>,
    pub children: Vec<MenuNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MenuNode {
    Leaf(MenuLeaf),
    Group(MenuGroup),
}

impl MenuNode {
    pub fn id(&self) -> usize {
        match self {
            MenuNode::Leaf(leaf) => leaf.id,
            MenuNode::Group(group) => group.id,
        }
    }
}

/// A node with no tag is always visible; a tagged node is visible iff its
/// tag is a case-sensitive member of the granted set.
fn visible(permission: Option<&str>, granted: &[String]) -> bool {
    match permission {
        Some(tag) => granted.iter().any(|g| g == tag),
        None => true,
    }
}

/// Filter a menu tree against the granted permission tags.
///
/// A group whose children all filter out is dropped unless the group is
/// independently visible, meaning it carries its own passing tag. The
/// transform is idempotent.
pub fn filter_menu(nodes: &[MenuNode], granted: &[String]) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter_map(|node| match node {
            MenuNode::Leaf(leaf) => {
                visible(leaf.permission.as_deref(), granted).then(|| MenuNode::Leaf(leaf.clone()))
            }
            MenuNode::Group(group) => {
                if !visible(group.permission.as_deref(), granted) {
                    return None;
                }
                let children = filter_menu(&group.children, granted);
                if children.is_empty() && group.permission.is_none() {
                    return None;
                }
                Some(MenuNode::Group(MenuGroup {
                    children,
                    ..group.clone()
                }))
            }
        })
        .collect()
}

/// The id of the group that should auto-open because the current route
/// matches one of its children.
pub fn open_group_for_route(nodes: &[MenuNode], route: &str) -> Option<usize> {
    nodes.iter().find_map(|node| match node {
        MenuNode::Leaf(_) => None,
        MenuNode::Group(group) => {
            let matches = group.children.iter().any(|child| match child {
                MenuNode::Leaf(leaf) => leaf.route == route,
                MenuNode::Group(_) => open_group_for_route(&group.children, route).is_some(),
            });
            matches.then_some(group.id)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: usize, route: &str, permission: Option<&str>) -> MenuNode {
        MenuNode::Leaf(MenuLeaf {
            id,
            label: format!("leaf-{id}"),
            route: route.to_string(),
            icon: None,
            permission: permission.map(str::to_string),
        })
    }

    fn group(id: usize, permission: Option<&str>, children: Vec<MenuNode>) -> MenuNode {
        MenuNode::Group(MenuGroup {
            id,
            label: format!("group-{id}"),
            icon: None,
            permission: permission.map(str::to_string),
            children,
        })
    }

    fn granted(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn sample_menu() -> Vec<MenuNode> {
        vec![
            leaf(0, "/dashboard", None),
            group(
                1,
                None,
                vec![
                    leaf(2, "/add-user", Some("ADD-USER")),
                    leaf(3, "/users", Some("VIEW-USER")),
                ],
            ),
            leaf(4, "/permissions", Some("VIEW-PERMISSIONS")),
        ]
    }

    #[test]
    fn untagged_nodes_survive_any_permission_set() {
        let filtered = filter_menu(&sample_menu(), &granted(&[]));
        assert!(filtered.iter().any(|n| n.id() == 0));
        // Only the untagged dashboard remains with an empty grant set.
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn tagged_leaf_requires_exact_membership() {
        let filtered = filter_menu(&sample_menu(), &granted(&["VIEW-PERMISSIONS"]));
        assert!(filtered.iter().any(|n| n.id() == 4));
        // Case-sensitive: lowercase grant does not match.
        let filtered = filter_menu(&sample_menu(), &granted(&["view-permissions"]));
        assert!(!filtered.iter().any(|n| n.id() == 4));
    }

    #[test]
    fn emptied_untagged_group_is_dropped() {
        let filtered = filter_menu(&sample_menu(), &granted(&["VIEW-PERMISSIONS"]));
        assert!(!filtered.iter().any(|n| n.id() == 1));
    }

    #[test]
    fn emptied_group_survives_when_independently_visible() {
        let menu = vec![group(
            1,
            Some("VIEW-USER"),
            vec![leaf(2, "/add-user", Some("ADD-USER"))],
        )];
        let filtered = filter_menu(&menu, &granted(&["VIEW-USER"]));
        assert_eq!(filtered.len(), 1);
        match &filtered[0] {
            MenuNode::Group(g) => assert!(g.children.is_empty()),
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn partially_granted_group_keeps_only_matching_children() {
        let filtered = filter_menu(&sample_menu(), &granted(&["VIEW-USER"]));
        let MenuNode::Group(g) = filtered
            .iter()
            .find(|n| n.id() == 1)
            .expect("group should survive")
        else {
            panic!("expected group");
        };
        assert_eq!(g.children.len(), 1);
        assert_eq!(g.children[0].id(), 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let grants = granted(&["VIEW-USER", "VIEW-PERMISSIONS"]);
        let once = filter_menu(&sample_menu(), &grants);
        let twice = filter_menu(&once, &grants);
        assert_eq!(once, twice);
    }

    #[test]
    fn group_auto_opens_for_child_route() {
        let menu = sample_menu();
        assert_eq!(open_group_for_route(&menu, "/users"), Some(1));
        assert_eq!(open_group_for_route(&menu, "/dashboard"), None);
        assert_eq!(open_group_for_route(&menu, "/missing"), None);
    }
}

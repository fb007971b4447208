//! Static navigation table shared by the router and the sidebar.
//!
//! Entries are either leaves (directly routable, `path` set) or groups
//! (expandable, non-empty `children`), never both. The table is defined once
//! and only ever read.

/// One navigation entry: a routable leaf or an expandable group.
#[derive(Debug)]
pub struct RouteEntry {
    /// Unique across the flattened table; keys rendering and expansion state.
    pub id: &'static str,
    pub path: Option<&'static str>,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub badge: Option<&'static str>,
    pub children: &'static [RouteEntry],
}

impl RouteEntry {
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn first_child_path(&self) -> Option<&'static str> {
        self.children.first().and_then(|c| c.path)
    }

    pub fn has_active_child(&self, path: &str) -> bool {
        self.children.iter().any(|c| c.path == Some(path))
    }

    /// A top-level entry is highlighted when its own path or any child path
    /// matches the current location.
    pub fn is_active(&self, path: &str) -> bool {
        self.path == Some(path) || self.has_active_child(path)
    }
}

pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        id: "main-dashboard",
        path: Some("/"),
        label: "Dashboard",
        icon: Some("layout-dashboard"),
        badge: None,
        children: &[],
    },
    RouteEntry {
        id: "zoning",
        path: None,
        label: "Zoning Clearance",
        icon: Some("locate"),
        badge: None,
        children: &[
            RouteEntry {
                id: "zoning-dashboard",
                path: Some("/zoning/dashboard"),
                label: "Dashboard",
                icon: None,
                badge: None,
                children: &[],
            },
            RouteEntry {
                id: "zoning-applications",
                path: Some("/zoning/applications"),
                label: "Applications",
                icon: None,
                badge: None,
                children: &[],
            },
        ],
    },
    RouteEntry {
        id: "building",
        path: None,
        label: "Building Review",
        icon: Some("hard-hat"),
        badge: None,
        children: &[RouteEntry {
            id: "building-dashboard",
            path: Some("/building/dashboard"),
            label: "Dashboard",
            icon: None,
            badge: None,
            children: &[],
        }],
    },
    RouteEntry {
        id: "housing",
        path: None,
        label: "Housing Beneficiary",
        icon: Some("home"),
        badge: None,
        children: &[RouteEntry {
            id: "housing-dashboard",
            path: Some("/housing/dashboard"),
            label: "Dashboard",
            icon: None,
            badge: None,
            children: &[],
        }],
    },
    RouteEntry {
        id: "occupancy",
        path: None,
        label: "Occupancy Monitoring",
        icon: Some("building"),
        badge: None,
        children: &[RouteEntry {
            id: "occupancy-dashboard",
            path: Some("/occupancy/dashboard"),
            label: "Dashboard",
            icon: None,
            badge: None,
            children: &[],
        }],
    },
    RouteEntry {
        id: "coordination",
        path: None,
        label: "Project Coordination",
        icon: Some("briefcase"),
        badge: None,
        children: &[RouteEntry {
            id: "coordination-dashboard",
            path: Some("/coordination/dashboard"),
            label: "Dashboard",
            icon: None,
            badge: None,
            children: &[],
        }],
    },
    RouteEntry {
        id: "settings",
        path: Some("/settings"),
        label: "Settings",
        icon: Some("settings"),
        badge: None,
        children: &[],
    },
];

/// Top-level entries followed by their children, in table order.
pub fn flattened() -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES
        .iter()
        .flat_map(|entry| std::iter::once(entry).chain(entry.children.iter()))
}

/// Known group id for a persisted expansion entry, if it still exists.
pub fn group_id(id: &str) -> Option<&'static str> {
    ROUTES
        .iter()
        .find(|entry| entry.is_group() && entry.id == id)
        .map(|entry| entry.id)
}

/// Breadcrumb labels for the header, derived from the table. Unknown paths
/// fall back to the root label.
pub fn breadcrumb_for(path: &str) -> Vec<&'static str> {
    for entry in ROUTES {
        if entry.path == Some(path) {
            return vec![entry.label];
        }
        if let Some(child) = entry.children.iter().find(|c| c.path == Some(path)) {
            return vec![entry.label, child.label];
        }
    }
    vec!["Dashboard"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entries_are_leaf_xor_group() {
        for entry in flattened() {
            assert!(
                entry.path.is_some() != entry.is_group(),
                "entry `{}` must have either a path or children, not both or neither",
                entry.id
            );
        }
    }

    #[test]
    fn ids_are_unique_across_flattened_table() {
        let mut seen = HashSet::new();
        for entry in flattened() {
            assert!(seen.insert(entry.id), "duplicate id `{}`", entry.id);
        }
    }

    #[test]
    fn routable_paths_match_the_published_list() {
        let paths: Vec<&str> = flattened().filter_map(|e| e.path).collect();
        assert_eq!(
            paths,
            [
                "/",
                "/zoning/dashboard",
                "/zoning/applications",
                "/building/dashboard",
                "/housing/dashboard",
                "/occupancy/dashboard",
                "/coordination/dashboard",
                "/settings",
            ]
        );
    }

    #[test]
    fn group_activity_follows_children() {
        let zoning = &ROUTES[1];
        assert!(zoning.is_active("/zoning/applications"));
        assert!(zoning.is_active("/zoning/dashboard"));
        assert!(!zoning.is_active("/"));
        assert_eq!(zoning.first_child_path(), Some("/zoning/dashboard"));
    }

    #[test]
    fn breadcrumbs_include_the_parent_group() {
        assert_eq!(
            breadcrumb_for("/zoning/applications"),
            ["Zoning Clearance", "Applications"]
        );
        assert_eq!(breadcrumb_for("/settings"), ["Settings"]);
        assert_eq!(breadcrumb_for("/nope"), ["Dashboard"]);
    }
}

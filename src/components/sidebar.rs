//! Sidebar navigation: renders the route table as a tree, with accordion
//! expansion (at most one group open after a user toggle), active-route
//! highlighting, and best-effort persistence of the expansion set.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use std::collections::HashSet;

use crate::components::icon::Icon;
use crate::components::layout::use_shell;
use crate::components::profile_card::ProfileCard;
use crate::routes::{self, RouteEntry, ROUTES};
use crate::storage::{self, keys, BrowserStorage, KeyValueStore};

/// Set of expanded group ids. User toggles keep it at most one; location
/// sync may grow it (see `sync_with_location`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: HashSet<&'static str>,
}

impl DropdownState {
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// User-initiated toggle. Opening a group collapses every other group;
    /// closing one leaves everything collapsed. Returns the path to navigate
    /// to when the freshly opened group has no child matching the location.
    pub fn toggle(&mut self, entry: &'static RouteEntry, current_path: &str) -> Option<&'static str> {
        let was_open = self.open.contains(entry.id);
        self.open.clear();
        if was_open {
            return None;
        }
        self.open.insert(entry.id);
        if entry.has_active_child(current_path) {
            None
        } else {
            entry.first_child_path()
        }
    }

    /// Reactive pass on location change: expand the group owning the active
    /// child. Deliberately additive — groups the user opened by hand stay
    /// open when navigation arrives from elsewhere (links, browser back).
    pub fn sync_with_location(&mut self, path: &str) {
        for entry in ROUTES.iter().filter(|e| e.is_group()) {
            if entry.has_active_child(path) {
                self.open.insert(entry.id);
            }
        }
    }

    /// Restore from storage; absent or corrupt data means all collapsed.
    /// Ids that no longer exist in the table are dropped.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let saved: Vec<String> =
            storage::get_json(store, keys::SIDEBAR_DROPDOWN_STATES).unwrap_or_default();
        Self {
            open: saved.iter().filter_map(|id| routes::group_id(id)).collect(),
        }
    }

    pub fn persist(&self, store: &dyn KeyValueStore) {
        let mut ids: Vec<&str> = self.open.iter().copied().collect();
        ids.sort_unstable();
        storage::set_json(store, keys::SIDEBAR_DROPDOWN_STATES, &ids);
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = use_shell();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let dropdowns = RwSignal::new(DropdownState::restore(&BrowserStorage));
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let scroll_offset = StoredValue::new(0);

    let go = Callback::new(move |path: &'static str| {
        navigate(path, NavigateOptions::default());
        shell.hide_for_mobile();
    });

    // Auto-expand the group owning the active child on every location change.
    Effect::new(move |_| {
        let path = pathname.get();
        dropdowns.update(|d| d.sync_with_location(&path));
    });

    // Mirror the expansion set to storage after every change.
    Effect::new(move |_| {
        dropdowns.with(|d| d.persist(&BrowserStorage));
    });

    // Reapply the remembered scroll offset once the nav is (re)mounted.
    Effect::new(move |_| {
        if let Some(nav) = nav_ref.get() {
            nav.set_scroll_top(scroll_offset.get_value());
        }
    });

    view! {
        <aside class="sidebar" role="navigation" aria-label="Main navigation">
            <div class="sidebar-header">
                <A href="/" {..} attr:class="sidebar-logo" on:click=move |_| shell.hide_for_mobile()>
                    <span class="sidebar-logo-mark">
                        <Icon name="globe" class="sidebar-logo-icon" />
                    </span>
                    <span class="sidebar-logo-text">
                        <span class="sidebar-title">"GSM"</span>
                        <span class="sidebar-subtitle">"Admin Dashboard"</span>
                    </span>
                </A>
            </div>
            <nav
                class="nav-list"
                role="menu"
                node_ref=nav_ref
                on:scroll=move |ev| {
                    let target: web_sys::Element = event_target(&ev);
                    scroll_offset.set_value(target.scroll_top());
                }
            >
                {ROUTES
                    .iter()
                    .map(|entry| {
                        if entry.is_group() {
                            view! { <NavGroup entry dropdowns pathname go /> }.into_any()
                        } else {
                            view! { <NavLeaf entry pathname /> }.into_any()
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar-footer">
                <ProfileCard />
            </div>
        </aside>
    }
}

#[component]
fn NavGroup(
    entry: &'static RouteEntry,
    dropdowns: RwSignal<DropdownState>,
    pathname: Memo<String>,
    go: Callback<&'static str>,
) -> impl IntoView {
    let shell = use_shell();
    let is_open = move || dropdowns.with(|d| d.is_open(entry.id));
    let is_active = move || pathname.with(|p| entry.is_active(p));

    let on_toggle = move |_| {
        let current = pathname.get_untracked();
        let target = dropdowns.try_update(|d| d.toggle(entry, &current)).flatten();
        if let Some(path) = target {
            go.run(path);
        }
    };

    view! {
        <div class="nav-group">
            <button
                class="nav-link nav-group-toggle"
                class:active=is_active
                on:click=on_toggle
                aria-expanded=move || is_open().to_string()
                role="menuitem"
            >
                <Icon name=entry.icon.unwrap_or("shopping-bag") class="nav-icon" />
                <span class="nav-label">{entry.label}</span>
                {entry.badge.map(|b| view! { <span class="nav-badge">{b}</span> })}
                <span class="nav-chevron" class:open=is_open>
                    <Icon name="chevron-down" class="nav-chevron-icon" />
                </span>
            </button>
            <Show when=is_open>
                <div class="nav-children" role="menu">
                    {entry
                        .children
                        .iter()
                        .filter_map(|sub| {
                            sub.path.map(|path| {
                                view! {
                                    <A
                                        href={path}
                                        {..}
                                        attr:class="nav-sublink"
                                        class:active=move || pathname.with(|p| p == path)
                                        role="menuitem"
                                        on:click=move |_| shell.hide_for_mobile()
                                    >
                                        <span class="nav-sublabel">{sub.label}</span>
                                        {sub.badge.map(|b| view! { <span class="nav-badge">{b}</span> })}
                                    </A>
                                }
                            })
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn NavLeaf(entry: &'static RouteEntry, pathname: Memo<String>) -> impl IntoView {
    let shell = use_shell();
    let path = entry.path.unwrap_or("/");

    view! {
        <A
            href={path}
            {..}
            attr:class="nav-link"
            class:active=move || pathname.with(|p| p == path)
            role="menuitem"
            on:click=move |_| shell.hide_for_mobile()
        >
            <Icon name=entry.icon.unwrap_or("shopping-bag") class="nav-icon" />
            <span class="nav-label">{entry.label}</span>
            {entry.badge.map(|b| view! { <span class="nav-badge">{b}</span> })}
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn zoning() -> &'static RouteEntry {
        &ROUTES[1]
    }

    fn building() -> &'static RouteEntry {
        &ROUTES[2]
    }

    #[test]
    fn opening_a_group_collapses_every_other_group() {
        let mut state = DropdownState::default();
        state.toggle(zoning(), "/zoning/dashboard");
        state.toggle(building(), "/building/dashboard");

        assert!(state.is_open("building"));
        assert!(!state.is_open("zoning"));
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn toggling_an_open_group_collapses_it_without_navigating() {
        let mut state = DropdownState::default();
        state.toggle(zoning(), "/zoning/dashboard");
        let target = state.toggle(zoning(), "/zoning/dashboard");

        assert_eq!(target, None);
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn opening_a_group_without_an_active_child_navigates_to_its_first_child() {
        let mut state = DropdownState::default();
        let target = state.toggle(zoning(), "/");
        assert_eq!(target, Some("/zoning/dashboard"));
    }

    #[test]
    fn opening_a_group_with_an_active_child_does_not_navigate() {
        let mut state = DropdownState::default();
        let target = state.toggle(zoning(), "/zoning/applications");
        assert_eq!(target, None);
        assert!(state.is_open("zoning"));
    }

    #[test]
    fn location_sync_expands_the_parent_of_the_active_child() {
        let mut state = DropdownState::default();
        state.sync_with_location("/zoning/applications");

        assert!(state.is_open("zoning"));
        assert!(zoning().is_active("/zoning/applications"));
        assert!(zoning().has_active_child("/zoning/applications"));
    }

    // The additive sync is intentional: navigating via a link must not
    // collapse a group the user opened by hand, even though user toggles
    // are exclusive. Do not unify the two transitions.
    #[test]
    fn location_sync_preserves_manually_opened_groups() {
        let mut state = DropdownState::default();
        state.toggle(building(), "/building/dashboard");
        state.sync_with_location("/zoning/applications");

        assert!(state.is_open("building"));
        assert!(state.is_open("zoning"));
        assert_eq!(state.open_count(), 2);
    }

    #[test]
    fn location_sync_ignores_paths_outside_any_group() {
        let mut state = DropdownState::default();
        state.sync_with_location("/settings");
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn restore_round_trips_through_storage() {
        let store = MemoryStore::default();
        let mut state = DropdownState::default();
        state.toggle(zoning(), "/zoning/dashboard");
        state.persist(&store);

        assert_eq!(DropdownState::restore(&store), state);
    }

    #[test]
    fn restore_from_corrupt_storage_is_all_collapsed() {
        let store = MemoryStore::default();
        store.set(keys::SIDEBAR_DROPDOWN_STATES, "][ nonsense");
        assert_eq!(DropdownState::restore(&store).open_count(), 0);
    }

    #[test]
    fn restore_drops_ids_unknown_to_the_route_table() {
        let store = MemoryStore::default();
        storage::set_json(
            &store,
            keys::SIDEBAR_DROPDOWN_STATES,
            &vec!["zoning", "retired-module"],
        );
        let state = DropdownState::restore(&store);
        assert!(state.is_open("zoning"));
        assert_eq!(state.open_count(), 1);
    }
}

//! Layout shell: owns sidebar visibility and the mobile breakpoint, and
//! provides both to descendants through context.

use leptos::ev;
use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::storage::{self, keys, BrowserStorage};

/// Viewport widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_hidden: bool,
    pub is_mobile: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            sidebar_hidden: false,
            is_mobile: false,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_hidden = !self.sidebar_hidden;
    }

    /// Backdrop dismissal: only meaningful on mobile while the sidebar shows.
    pub fn request_close(&mut self) {
        if self.is_mobile && !self.sidebar_hidden {
            self.sidebar_hidden = true;
        }
    }

    /// Navigation side effect: the sidebar gets out of the way on mobile.
    pub fn hide_for_mobile(&mut self) {
        if self.is_mobile {
            self.sidebar_hidden = true;
        }
    }

    /// Breakpoint recomputation; while mobile the sidebar stays hidden.
    /// Returns true when the layout just left mobile, which is when the
    /// persisted desktop visibility must be re-read.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        let was_mobile = self.is_mobile;
        self.is_mobile = width < MOBILE_BREAKPOINT;
        if self.is_mobile {
            self.sidebar_hidden = true;
        }
        was_mobile && !self.is_mobile
    }

    /// Apply the stored desktop visibility; absent storage keeps the current
    /// state, and mobile layouts never restore.
    pub fn restore_visibility(&mut self, stored: Option<bool>) {
        if self.is_mobile {
            return;
        }
        if let Some(hidden) = stored {
            self.sidebar_hidden = hidden;
        }
    }

    /// Visibility is only persisted for desktop layouts; mobile is transient.
    pub fn persists_visibility(&self) -> bool {
        !self.is_mobile
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct ShellContext(pub RwSignal<ShellState>);

impl ShellContext {
    pub fn toggle_sidebar(&self) {
        self.0.update(|s| s.toggle_sidebar());
    }

    pub fn request_close(&self) {
        self.0.update(|s| s.request_close());
    }

    pub fn hide_for_mobile(&self) {
        self.0.update(|s| s.hide_for_mobile());
    }

    pub fn is_mobile(&self) -> bool {
        self.0.with(|s| s.is_mobile)
    }
}

pub fn use_shell() -> ShellContext {
    expect_context::<ShellContext>()
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT)
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let shell = RwSignal::new(ShellState::new());
    provide_context(ShellContext(shell));

    // Initial breakpoint, then restore desktop visibility from storage.
    shell.update(|s| {
        s.set_viewport_width(viewport_width());
        s.restore_visibility(storage::get_json(&BrowserStorage, keys::SIDEBAR_HIDDEN));
    });

    // Mirror desktop visibility to storage after every change.
    Effect::new(move |_| {
        let state = shell.get();
        if state.persists_visibility() {
            storage::set_json(&BrowserStorage, keys::SIDEBAR_HIDDEN, &state.sidebar_hidden);
        }
    });

    // Resize subscription held for the component's lifetime; the handle is
    // removed when the scope is disposed. Leaving mobile re-reads the saved
    // desktop visibility so the mobile-forced hide never overwrites it.
    let _resize_handle = window_event_listener(ev::resize, move |_| {
        shell.update(|s| {
            if s.set_viewport_width(viewport_width()) {
                s.restore_visibility(storage::get_json(&BrowserStorage, keys::SIDEBAR_HIDDEN));
            }
        });
    });

    let shell_ctx = ShellContext(shell);
    view! {
        <div class="app-layout">
            <Show when=move || shell.with(|s| s.is_mobile && !s.sidebar_hidden)>
                <div class="sidebar-backdrop" on:click=move |_| shell_ctx.request_close()></div>
            </Show>
            <Show when=move || shell.with(|s| !s.sidebar_hidden)>
                <div class="sidebar-slot" class:sidebar-slot-overlay=move || shell_ctx.is_mobile()>
                    <Sidebar />
                </div>
            </Show>
            <div class="content-column">
                <Header />
                <main class="content">{children()}</main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};

    #[test]
    fn entering_mobile_forces_the_sidebar_hidden() {
        let mut state = ShellState::new();
        state.set_viewport_width(1200.0);
        assert!(!state.sidebar_hidden);

        state.set_viewport_width(500.0);
        assert!(state.is_mobile);
        assert!(state.sidebar_hidden);
    }

    #[test]
    fn resize_into_mobile_overrides_a_shown_sidebar() {
        let mut state = ShellState::new();
        state.set_viewport_width(1200.0);
        state.toggle_sidebar();
        state.toggle_sidebar();
        assert!(!state.sidebar_hidden);

        state.set_viewport_width(767.0);
        assert!(state.sidebar_hidden);
    }

    #[test]
    fn backdrop_close_is_a_noop_on_desktop() {
        let mut state = ShellState::new();
        state.set_viewport_width(1200.0);
        state.request_close();
        assert!(!state.sidebar_hidden);
    }

    #[test]
    fn backdrop_close_hides_a_shown_mobile_sidebar() {
        let mut state = ShellState::new();
        state.set_viewport_width(500.0);
        state.toggle_sidebar(); // user opened it over the content
        assert!(!state.sidebar_hidden);

        state.request_close();
        assert!(state.sidebar_hidden);
    }

    #[test]
    fn resize_round_trip_keeps_the_saved_desktop_preference() {
        let store = MemoryStore::default();
        storage::set_json(&store, keys::SIDEBAR_HIDDEN, &false);

        // the persist-effect gate over state changes
        let persist = |state: &ShellState, store: &MemoryStore| {
            if state.persists_visibility() {
                storage::set_json(store, keys::SIDEBAR_HIDDEN, &state.sidebar_hidden);
            }
        };

        let mut state = ShellState::new();
        state.set_viewport_width(1200.0);
        state.restore_visibility(storage::get_json(&store, keys::SIDEBAR_HIDDEN));
        assert!(!state.sidebar_hidden);

        state.set_viewport_width(500.0);
        persist(&state, &store);
        assert!(state.sidebar_hidden);

        let left_mobile = state.set_viewport_width(1200.0);
        assert!(left_mobile);
        state.restore_visibility(storage::get_json(&store, keys::SIDEBAR_HIDDEN));
        persist(&state, &store);

        assert!(!state.sidebar_hidden);
        assert_eq!(store.get(keys::SIDEBAR_HIDDEN).as_deref(), Some("false"));
    }

    #[test]
    fn leaving_mobile_without_a_saved_preference_keeps_the_sidebar_hidden() {
        let mut state = ShellState::new();
        state.set_viewport_width(500.0);
        assert!(state.sidebar_hidden);

        assert!(state.set_viewport_width(1200.0));
        state.restore_visibility(None);
        assert!(state.sidebar_hidden);
    }

    #[test]
    fn restore_never_applies_while_mobile() {
        let mut state = ShellState::new();
        state.set_viewport_width(500.0);
        state.restore_visibility(Some(false));
        assert!(state.sidebar_hidden);
    }

    #[test]
    fn visibility_is_only_persisted_on_desktop() {
        let store = MemoryStore::default();

        let mut desktop = ShellState::new();
        desktop.set_viewport_width(1200.0);
        desktop.toggle_sidebar();
        if desktop.persists_visibility() {
            storage::set_json(&store, keys::SIDEBAR_HIDDEN, &desktop.sidebar_hidden);
        }
        assert_eq!(store.get(keys::SIDEBAR_HIDDEN).as_deref(), Some("true"));

        let mut mobile = ShellState::new();
        mobile.set_viewport_width(500.0);
        mobile.toggle_sidebar();
        if mobile.persists_visibility() {
            storage::set_json(&store, keys::SIDEBAR_HIDDEN, &mobile.sidebar_hidden);
        }
        // untouched by the mobile transition
        assert_eq!(store.get(keys::SIDEBAR_HIDDEN).as_deref(), Some("true"));
    }
}

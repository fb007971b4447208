//! Profile dropdown at the bottom of the sidebar. Menu actions are guarded
//! against accidental double activation and support arrow-key navigation.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::icon::Icon;
use crate::components::layout::use_shell;

/// Activations closer together than the window are ignored outright. Guards
/// against double-taps on touch devices; there is no concurrency here.
#[derive(Clone, Copy, Debug)]
pub struct DebounceGuard {
    window_ms: f64,
    last_accepted: Option<f64>,
}

impl DebounceGuard {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_accepted: None,
        }
    }

    /// Accepts the activation at `now_ms` unless it falls inside the window
    /// of the previously accepted one.
    pub fn try_accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted {
            if now_ms - last < self.window_ms {
                return false;
            }
        }
        self.last_accepted = Some(now_ms);
        true
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Move focus to the nearest sibling button, clamped at either end.
fn focus_adjacent(ev: &web_sys::KeyboardEvent, forward: bool) {
    let Some(current) = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return;
    };
    let mut sibling = if forward {
        current.next_element_sibling()
    } else {
        current.previous_element_sibling()
    };
    while let Some(el) = sibling {
        if el.tag_name() == "BUTTON" {
            if let Ok(button) = el.dyn_into::<web_sys::HtmlElement>() {
                let _ = button.focus();
            }
            return;
        }
        sibling = if forward {
            el.next_element_sibling()
        } else {
            el.previous_element_sibling()
        };
    }
}

fn on_menu_key(ev: web_sys::KeyboardEvent) {
    match ev.key().as_str() {
        "ArrowDown" => {
            ev.prevent_default();
            focus_adjacent(&ev, true);
        }
        "ArrowUp" => {
            ev.prevent_default();
            focus_adjacent(&ev, false);
        }
        _ => {}
    }
}

#[component]
pub fn ProfileCard() -> impl IntoView {
    let shell = use_shell();
    let (is_open, set_is_open) = signal(false);
    let guard = StoredValue::new(DebounceGuard::new(300.0));

    let handle_menu_click = move |_| {
        let accepted = guard
            .try_update_value(|g| g.try_accept(now_ms()))
            .unwrap_or(false);
        if !accepted {
            return;
        }
        set_is_open.set(false);
        shell.hide_for_mobile();
    };

    view! {
        <div class="profile-card">
            <button
                class="profile-trigger"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
                aria-expanded=move || is_open.get().to_string()
                aria-haspopup="menu"
            >
                <span class="profile-avatar">
                    <Icon name="user" class="profile-avatar-icon" />
                </span>
                <span class="profile-identity">
                    <span class="profile-name">"John Doe"</span>
                    <span class="profile-role">"Administrator"</span>
                </span>
                <span class="nav-chevron" class:open=move || is_open.get()>
                    <Icon name="chevron-down" class="nav-chevron-icon" />
                </span>
            </button>
            <Show when=move || is_open.get()>
                <div class="profile-menu" role="menu">
                    <button
                        class="profile-menu-item"
                        on:click=handle_menu_click
                        on:keydown=on_menu_key
                        role="menuitem"
                    >
                        <Icon name="user" class="menu-icon" />
                        <span>"Profile Settings"</span>
                    </button>
                    <button
                        class="profile-menu-item"
                        on:click=handle_menu_click
                        on:keydown=on_menu_key
                        role="menuitem"
                    >
                        <Icon name="settings" class="menu-icon" />
                        <span>"Preferences"</span>
                    </button>
                    <hr class="profile-menu-divider" />
                    // Presentational: no session termination in this version.
                    <button
                        class="profile-menu-item sign-out"
                        on:click=handle_menu_click
                        on:keydown=on_menu_key
                        role="menuitem"
                    >
                        <Icon name="log-out" class="menu-icon" />
                        <span>"Sign Out"</span>
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_activation_inside_the_window_is_ignored() {
        let mut guard = DebounceGuard::new(300.0);
        let mut effects = 0;
        for t in [1_000.0, 1_150.0] {
            if guard.try_accept(t) {
                effects += 1;
            }
        }
        assert_eq!(effects, 1);
    }

    #[test]
    fn activation_after_the_window_is_accepted() {
        let mut guard = DebounceGuard::new(300.0);
        assert!(guard.try_accept(1_000.0));
        assert!(!guard.try_accept(1_299.0));
        assert!(guard.try_accept(1_300.0));
    }

    #[test]
    fn first_activation_is_always_accepted() {
        let mut guard = DebounceGuard::new(300.0);
        assert!(guard.try_accept(0.0));
    }

    #[test]
    fn rejected_activation_does_not_reset_the_window() {
        let mut guard = DebounceGuard::new(300.0);
        assert!(guard.try_accept(1_000.0));
        assert!(!guard.try_accept(1_200.0));
        // measured from the accepted activation, not the rejected one
        assert!(guard.try_accept(1_301.0));
    }
}

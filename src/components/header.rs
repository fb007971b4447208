//! Top bar: sidebar toggle, title and breadcrumb, presentational search and
//! notification affordances, and the light/dark theme toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icon::Icon;
use crate::components::layout::use_shell;
use crate::routes;
use crate::storage::{keys, BrowserStorage, KeyValueStore};
use crate::theme::ThemeContext;

#[component]
pub fn Header() -> impl IntoView {
    let shell = use_shell();
    let pathname = use_location().pathname;
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();

    let toggle_theme = move |_| {
        let next = theme.get_untracked().toggle();
        BrowserStorage.set(keys::THEME, next.as_str());
        set_theme.set(next);
    };

    let breadcrumb = move || pathname.with(|p| routes::breadcrumb_for(p).join(" > "));

    view! {
        <header class="header">
            <div class="header-left">
                <button
                    class="header-button"
                    on:click=move |_| shell.toggle_sidebar()
                    aria-label="Toggle sidebar"
                >
                    <Icon name="menu" class="header-icon" />
                </button>
                <div class="header-titles">
                    <h1 class="header-title">"URBAN PLANNING, ZONING & HOUSING"</h1>
                    <span class="header-breadcrumb">{breadcrumb}</span>
                </div>
            </div>
            <div class="header-right">
                // Search and filter are presentational in this version.
                <div class="header-search">
                    <Icon name="search" class="search-icon" />
                    <input type="text" placeholder="Search..." class="search-input" />
                    <button class="search-filter" aria-label="Filter">
                        <Icon name="filter" class="header-icon" />
                    </button>
                </div>
                <button class="header-button notification-button" aria-label="Notifications">
                    <Icon name="bell" class="header-icon" />
                    <span class="notification-badge">"1"</span>
                </button>
                <button
                    class="header-button theme-toggle"
                    on:click=toggle_theme
                    aria-label="Toggle dark mode"
                >
                    <Show
                        when=move || theme.get().is_dark()
                        fallback=|| view! { <Icon name="moon" class="header-icon" /> }
                    >
                        <Icon name="sun" class="header-icon" />
                    </Show>
                </button>
            </div>
        </header>
    }
}

use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page panel">
            <h1 class="page-title">"Settings"</h1>
            <p class="page-description">
                "Settings page. Account and application preferences will live here."
            </p>
        </div>
    }
}

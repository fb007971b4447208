use leptos::prelude::*;

#[component]
pub fn ZoningApplications() -> impl IntoView {
    view! {
        <div class="page panel">
            <h1 class="page-title">"Zoning Applications"</h1>
            <p class="page-description">
                "Welcome to the zoning applications page. This lists submitted \
                 clearance applications awaiting review."
            </p>
        </div>
    }
}

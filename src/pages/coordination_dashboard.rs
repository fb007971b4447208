use leptos::prelude::*;

#[component]
pub fn CoordinationDashboard() -> impl IntoView {
    view! {
        <div class="page panel">
            <h1 class="page-title">"Coordination Dashboard"</h1>
            <p class="page-description">
                "Welcome to the coordination dashboard page. This provides an overview of \
                 coordination activities, compliance status, and key metrics."
            </p>
        </div>
    }
}

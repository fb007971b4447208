use leptos::prelude::*;

#[component]
pub fn ZoningDashboard() -> impl IntoView {
    view! {
        <div class="page panel">
            <h1 class="page-title">"Zoning Dashboard"</h1>
            <p class="page-description">
                "Welcome to the zoning dashboard page. This provides an overview of \
                 zoning clearances, compliance status, and key metrics."
            </p>
        </div>
    }
}

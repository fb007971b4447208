use leptos::prelude::*;

#[component]
pub fn BuildingDashboard() -> impl IntoView {
    view! {
        <div class="page panel">
            <h1 class="page-title">"Building Dashboard"</h1>
            <p class="page-description">
                "Welcome to the building dashboard page. This provides an overview of \
                 permit reviews, compliance status, and key metrics."
            </p>
        </div>
    }
}

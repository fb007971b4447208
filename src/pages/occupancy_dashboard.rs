use leptos::prelude::*;

#[component]
pub fn OccupancyDashboard() -> impl IntoView {
    view! {
        <div class="page panel">
            <h1 class="page-title">"Occupancy Dashboard"</h1>
            <p class="page-description">
                "Welcome to the occupancy dashboard page. This provides an overview of \
                 occupancy permits, compliance status, and key metrics."
            </p>
        </div>
    }
}

use leptos::prelude::*;

#[component]
pub fn HousingDashboard() -> impl IntoView {
    view! {
        <div class="page panel">
            <h1 class="page-title">"Housing Dashboard"</h1>
            <p class="page-description">
                "Welcome to the housing dashboard page. This provides an overview of \
                 housing applications, compliance status, and key metrics."
            </p>
        </div>
    }
}

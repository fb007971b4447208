use leptos::prelude::*;

#[component]
pub fn MainDashboard() -> impl IntoView {
    view! {
        <div class="page main-dashboard">
            <h1 class="page-title">"Dashboard"</h1>
            <p class="page-description">
                "Welcome to the urban planning, zoning and housing admin dashboard. \
                 Pick a module from the sidebar to get started."
            </p>

            <div class="card-grid">
                <div class="card">
                    <h3>"Zoning Clearance"</h3>
                    <p>"Review zoning applications and clearance status"</p>
                    <a href="/zoning/dashboard" class="btn btn-primary">"Open Zoning"</a>
                </div>
                <div class="card">
                    <h3>"Building Review"</h3>
                    <p>"Track building permit reviews and inspections"</p>
                    <a href="/building/dashboard" class="btn btn-primary">"Open Building"</a>
                </div>
                <div class="card">
                    <h3>"Housing Beneficiary"</h3>
                    <p>"Monitor housing applications and beneficiaries"</p>
                    <a href="/housing/dashboard" class="btn btn-primary">"Open Housing"</a>
                </div>
                <div class="card">
                    <h3>"Occupancy Monitoring"</h3>
                    <p>"Follow occupancy permits and compliance"</p>
                    <a href="/occupancy/dashboard" class="btn btn-primary">"Open Occupancy"</a>
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::layout::Layout;
use crate::pages::building_dashboard::BuildingDashboard;
use crate::pages::coordination_dashboard::CoordinationDashboard;
use crate::pages::housing_dashboard::HousingDashboard;
use crate::pages::main_dashboard::MainDashboard;
use crate::pages::occupancy_dashboard::OccupancyDashboard;
use crate::pages::settings::SettingsPage;
use crate::pages::zoning_applications::ZoningApplications;
use crate::pages::zoning_dashboard::ZoningDashboard;
use crate::storage::BrowserStorage;
use crate::theme::{apply_theme, initial_theme, prefers_dark, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    // Stored theme wins, otherwise the OS color scheme.
    let (theme, set_theme) = signal(initial_theme(&BrowserStorage, prefers_dark()));
    provide_context(ThemeContext { theme, set_theme });

    // Apply the theme to the DOM whenever the signal changes.
    Effect::new(move |_| {
        apply_theme(theme.get());
    });

    // Paths must stay in lock-step with the table in `routes`; the table's
    // tests pin the full list.
    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=MainDashboard />
                    <Route path=path!("/zoning/dashboard") view=ZoningDashboard />
                    <Route path=path!("/zoning/applications") view=ZoningApplications />
                    <Route path=path!("/building/dashboard") view=BuildingDashboard />
                    <Route path=path!("/housing/dashboard") view=HousingDashboard />
                    <Route path=path!("/occupancy/dashboard") view=OccupancyDashboard />
                    <Route path=path!("/coordination/dashboard") view=CoordinationDashboard />
                    <Route path=path!("/settings") view=SettingsPage />
                </Routes>
            </Layout>
        </Router>
    }
}

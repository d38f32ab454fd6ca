use crate::domain::calculator::ui::CalculatorPage;
use crate::domain::cities::CityDirectory;
use crate::layout::{AlertHost, AlertService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the bundled city directory to the whole app via context.
    provide_context(CityDirectory::bundled());

    // Provide AlertService for the transient banner stack
    provide_context(AlertService::new());

    view! {
        <div class="container">
            <AlertHost />
            <CalculatorPage />
        </div>
    }
}

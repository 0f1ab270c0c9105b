//! Application shell: navigation, the active page and the toaster.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router mounts this component at `/`. Page switches never touch the URL
//! or the server; they replace the rendered page in memory. Leaving a page
//! disposes its local signals, so filters and form drafts reset on return.

#[cfg(all(test, feature = "ssr"))]
#[path = "index_test.rs"]
mod index_test;

use catalog::PageId;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::navigation::Navigation;
use crate::components::toaster::Toaster;
use crate::pages::dashboard::DashboardPage;
use crate::pages::forecasting::ForecastingPage;
use crate::pages::impact::ImpactPage;
use crate::pages::orders::OrdersPage;
use crate::pages::suppliers::SuppliersPage;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
fn log_navigation(page: PageId) {
    log::info!("navigate -> {page}");
}

#[cfg(not(feature = "hydrate"))]
fn log_navigation(_page: PageId) {}

#[component]
pub fn IndexPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let page = Memo::new(move |_| ui.get().page);

    let navigate = Callback::new(move |target: PageId| {
        ui.update(|u| {
            if u.navigate(target) {
                log_navigation(target);
            }
        });
    });

    view! {
        <div class="app-shell">
            <Navigation on_page_change=navigate/>
            <main class="app-shell__main">
                {move || view! { <PageView page=page.get() on_navigate=navigate/> }}
            </main>
            <Toaster/>
        </div>
    }
}

/// Exactly one page body for `page`.
#[component]
pub fn PageView(page: PageId, on_navigate: Callback<PageId>) -> impl IntoView {
    match page {
        PageId::Dashboard => view! { <DashboardPage on_navigate=on_navigate/> }.into_any(),
        PageId::Forecasting => view! { <ForecastingPage/> }.into_any(),
        PageId::Suppliers => view! { <SuppliersPage/> }.into_any(),
        PageId::Impact => view! { <ImpactPage/> }.into_any(),
        PageId::Orders => view! { <OrdersPage/> }.into_any(),
    }
}

use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use super::*;
use crate::state::toast::ToastState;

fn with_contexts<T>(page: PageId, render: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(UiState { page, menu_open: false }));
        provide_context(RwSignal::new(ToastState::default()));
        render()
    })
}

fn render_page(page: PageId) -> String {
    with_contexts(page, || {
        let on_navigate = Callback::new(|_: PageId| {});
        view! { <PageView page=page on_navigate=on_navigate/> }.to_html()
    })
}

#[test]
fn each_page_renders_its_single_heading() {
    for page in PageId::ALL {
        let html = render_page(page);
        assert!(html.contains(page.heading()), "{page}: heading missing");
        assert_eq!(html.matches("<h1").count(), 1, "{page}: expected exactly one h1");
    }
}

#[test]
fn only_the_selected_page_is_rendered() {
    for page in PageId::ALL {
        let html = render_page(page);
        assert!(html.contains(&format!("data-page=\"{}\"", page.id())));
        for other in PageId::ALL.into_iter().filter(|p| *p != page) {
            assert!(!html.contains(&format!("data-page=\"{}\"", other.id())), "{page} also rendered {other}");
        }
    }
}

#[test]
fn forecasting_starts_with_placeholder() {
    let html = render_page(PageId::Forecasting);
    assert!(html.contains("Ready for AI Analysis"));
    assert!(html.contains("Generate Forecast"));
    assert!(!html.contains("6-Month Demand Forecast"));
}

#[test]
fn suppliers_and_orders_render_every_fixture_row() {
    let suppliers = render_page(PageId::Suppliers);
    for supplier in catalog::fixtures::SUPPLIERS {
        assert!(suppliers.contains(supplier.name));
    }
    let orders = render_page(PageId::Orders);
    for order in catalog::fixtures::ORDERS {
        assert!(orders.contains(order.id));
    }
    assert!(orders.contains("$8.4k"));
    assert!(orders.contains("93%"));
}

#[test]
fn shell_renders_navigation_and_dashboard() {
    let html = with_contexts(PageId::Dashboard, || view! { <IndexPage/> }.to_html());
    assert!(html.contains("EcoPack360"));
    assert!(html.contains("AI-Powered Packaging Platform"));
    for page in PageId::ALL {
        assert!(html.contains(page.label()), "nav item {page} missing");
    }
    assert!(html.contains("Welcome to EcoPack360"));
    assert_eq!(html.matches("<h1").count(), 1);
}

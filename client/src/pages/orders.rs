//! Order management: request form, filters, order history and totals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Orders are fixtures and never change. Submitting the request form logs the
//! draft in the browser console, raises a toast and closes the form.

use catalog::fixtures::ORDERS;
use catalog::format::{format_compact_currency, format_percent};
use catalog::stats::{average_order_sustainability, count_by_status, total_order_value};
use catalog::{Icon, Order, OrderStatus, PageId, StatusFilter, Tone};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::glyph::Glyph;
use crate::components::order_card::OrderCard;
use crate::components::order_request_form::OrderRequestForm;
use crate::components::page_header::PageHeader;
use crate::components::tiles::FigureTile;
use crate::components::toaster::notify;
use crate::state::orders::{OrderDraft, OrdersState};
use crate::state::toast::{ORDER_SENT_DESCRIPTION, ORDER_SENT_TITLE, ToastState};

#[cfg(feature = "hydrate")]
fn log_submitted_draft(draft: &OrderDraft) {
    match serde_json::to_string(draft) {
        Ok(json) => log::info!("order request submitted: {json}"),
        Err(e) => log::warn!("order request submitted but could not be serialized: {e}"),
    }
}

#[cfg(not(feature = "hydrate"))]
fn log_submitted_draft(_draft: &OrderDraft) {}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let orders = RwSignal::new(OrdersState::default());
    let visible = Memo::new(move |_| orders.with(OrdersState::visible));
    let show_form = Memo::new(move |_| orders.with(|s| s.show_form));

    let on_submit = Callback::new(move |()| {
        let mut draft = OrderDraft::default();
        orders.update(|s| draft = s.submit_form());
        log_submitted_draft(&draft);
        notify(toasts, ORDER_SENT_TITLE, ORDER_SENT_DESCRIPTION);
    });
    let on_toggle = Callback::new(move |id: &'static str| orders.update(|s| s.toggle_details(id)));
    let on_modify = Callback::new(move |order: &'static Order| orders.update(|s| s.start_revision(order)));

    let page = PageId::Orders;
    view! {
        <section class="page page--orders" data-page=page.id()>
            <PageHeader page=page>
                <button class="btn btn--primary" on:click=move |_| orders.update(OrdersState::open_form)>
                    <Glyph icon=Icon::Plus/>
                    "New Order Request"
                </button>
            </PageHeader>

            <Show when=move || show_form.get()>
                <OrderRequestForm orders=orders on_submit=on_submit/>
            </Show>

            <section class="card filter-bar">
                <label class="search-field">
                    <Glyph icon=Icon::Search class="search-field__icon"/>
                    <input
                        class="field__input search-field__input"
                        type="search"
                        aria-label="Search orders"
                        placeholder="Search orders..."
                        prop:value=move || orders.with(|s| s.query.clone())
                        on:input=move |ev| orders.update(|s| s.set_query(event_target_value(&ev)))
                    />
                </label>
                <label class="select-field">
                    <Glyph icon=Icon::Filter class="select-field__icon"/>
                    <select
                        class="field__input"
                        aria-label="Status"
                        prop:value=move || orders.with(|s| s.status_filter.id())
                        on:change=move |ev| orders.update(|s| s.select_status(&event_target_value(&ev)))
                    >
                        {StatusFilter::OPTIONS
                            .into_iter()
                            .map(|option| view! { <option value=option.id()>{option.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </section>

            <div class="order-list">
                {move || {
                    let rows = visible.get();
                    if rows.is_empty() {
                        return vec![view! { <p class="empty-state">"No orders match these filters."</p> }.into_any()];
                    }
                    rows.into_iter()
                        .map(|order| {
                            let expanded = Signal::derive(move || orders.with(|s| s.is_expanded(order.id)));
                            view! {
                                <OrderCard order=order expanded=expanded on_toggle=on_toggle on_modify=on_modify/>
                            }
                                .into_any()
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="tile-grid tile-grid--four">
                <FigureTile
                    value=count_by_status(ORDERS, OrderStatus::Completed).to_string()
                    label="Completed Orders"
                    tone=Tone::Primary
                />
                <FigureTile
                    value=count_by_status(ORDERS, OrderStatus::Pending).to_string()
                    label="Pending Requests"
                    tone=Tone::Warning
                />
                <FigureTile
                    value=format_compact_currency(total_order_value(ORDERS))
                    label="Total Order Value"
                    tone=Tone::Success
                />
                <FigureTile
                    value=format_percent(average_order_sustainability(ORDERS))
                    label="Avg Sustainability"
                    tone=Tone::PrimaryLight
                />
            </div>
        </section>
    }
}

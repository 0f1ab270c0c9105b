//! Order history card with an expandable details panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Expansion state belongs to the orders page so only one card is open at a
//! time. The card reads it through `expanded` and reports clicks upward.

#[cfg(test)]
#[path = "order_card_test.rs"]
mod order_card_test;

use catalog::fixtures::SUPPLIERS;
use catalog::format::{format_currency, format_quantity};
use catalog::stats::supplier_contact;
use catalog::{Order, OrderStatus};
use leptos::prelude::*;

use crate::components::score_bar::ScoreBar;
use crate::components::status_badge::StatusBadge;

/// Placeholder shown when an order has no delivery date.
pub const NO_DATE: &str = "—";

pub fn delivery_text(order: &Order) -> &'static str {
    order.delivery_date.unwrap_or(NO_DATE)
}

/// Contact line for the order's supplier, when the directory lists one.
pub fn contact_line(order: &Order) -> Option<String> {
    supplier_contact(SUPPLIERS, order.supplier).map(|c| format!("{} · {}", c.email, c.phone))
}

#[component]
pub fn OrderCard(
    order: &'static Order,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle: Callback<&'static str>,
    on_modify: Callback<&'static Order>,
) -> impl IntoView {
    let id = order.id;
    let details = move || {
        expanded.get().then(|| {
            view! {
                <dl class="order-card__details">
                    <div>
                        <dt>"Supplier contact"</dt>
                        <dd>{contact_line(order).unwrap_or_else(|| NO_DATE.to_owned())}</dd>
                    </div>
                    <div>
                        <dt>"Quantity"</dt>
                        <dd>{format_quantity(order.quantity, order.quantity_unit)}</dd>
                    </div>
                    <div>
                        <dt>"Status"</dt>
                        <dd>{order.status.label()}</dd>
                    </div>
                </dl>
            }
        })
    };
    let rejection = order.rejection_reason.filter(|_| order.status == OrderStatus::Rejected).map(|reason| {
        view! {
            <div class="order-card__rejection" role="note">
                <strong>"Rejection Reason:"</strong>
                " "
                {reason}
            </div>
        }
    });
    let modify = (order.status == OrderStatus::Pending).then(|| {
        view! {
            <button class="btn btn--outline btn--small" on:click=move |_| on_modify.run(order)>
                "Modify"
            </button>
        }
    });

    view! {
        <article class="card order-card" data-order-id=id>
            <div class="order-card__main">
                <div class="order-card__summary">
                    <div class="order-card__title-row">
                        <h2 class="order-card__id">{id}</h2>
                        <StatusBadge status=order.status/>
                    </div>
                    <p>
                        <strong>"Supplier:"</strong>
                        " "
                        {order.supplier}
                    </p>
                    <p>
                        <strong>"Product:"</strong>
                        " "
                        {order.product}
                    </p>
                    <p>
                        <strong>"Quantity:"</strong>
                        " "
                        {format_quantity(order.quantity, order.quantity_unit)}
                    </p>
                </div>

                <dl class="order-card__facts">
                    <div>
                        <dt>"Request Date"</dt>
                        <dd>{order.request_date}</dd>
                    </div>
                    <div>
                        <dt>{order.status.delivery_label()}</dt>
                        <dd>{delivery_text(order)}</dd>
                    </div>
                    <div>
                        <dt>"Total Value"</dt>
                        <dd>{format_currency(order.total_value)}</dd>
                    </div>
                    <div>
                        <dt>"Sustainability"</dt>
                        <dd class="order-card__score">
                            <span>{format!("{}%", order.sustainability)}</span>
                            <ScoreBar percent=order.sustainability compact=true/>
                        </dd>
                    </div>
                </dl>

                <div class="order-card__actions">
                    <button
                        class="btn btn--outline btn--small"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| on_toggle.run(id)
                    >
                        {move || if expanded.get() { "Hide Details" } else { "View Details" }}
                    </button>
                    {modify}
                </div>
            </div>
            {details}
            {rejection}
        </article>
    }
}

//! "Create New Order Request" form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every field writes straight into `OrdersState::draft`. Nothing is
//! validated; the page decides what a submit does.

use catalog::fixtures::SUPPLIERS;
use catalog::stats::supplier_names;
use leptos::prelude::*;

use crate::state::orders::{DraftField, OrdersState};

/// Reader and writer pair for one draft field.
fn bind(orders: RwSignal<OrdersState>, field: DraftField) -> (impl Fn() -> String + Copy, impl Fn(String) + Copy) {
    let read = move || orders.with(|s| s.draft.get(field).to_owned());
    let write = move |value: String| orders.update(|s| s.draft.set(field, value));
    (read, write)
}

#[component]
pub fn OrderRequestForm(orders: RwSignal<OrdersState>, on_submit: Callback<()>) -> impl IntoView {
    let (supplier, set_supplier) = bind(orders, DraftField::Supplier);
    let (product, set_product) = bind(orders, DraftField::Product);
    let (quantity, set_quantity) = bind(orders, DraftField::Quantity);
    let (budget, set_budget) = bind(orders, DraftField::Budget);
    let (delivery, set_delivery) = bind(orders, DraftField::DeliveryDate);
    let (requirements, set_requirements) = bind(orders, DraftField::Requirements);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };
    let on_cancel = move |_| orders.update(OrdersState::cancel_form);

    view! {
        <form class="card order-form" on:submit=on_form_submit>
            <header class="card__header">
                <h2 class="card__title">"Create New Order Request"</h2>
                <p class="card__description">
                    "Send a detailed order request to a biodegradable packaging supplier"
                </p>
            </header>

            <div class="form-grid form-grid--two">
                <label class="field">
                    <span class="field__label">"Supplier"</span>
                    <select
                        class="field__input"
                        prop:value=supplier
                        on:change=move |ev| set_supplier(event_target_value(&ev))
                    >
                        <option value="">"Select a supplier"</option>
                        {supplier_names(SUPPLIERS)
                            .into_iter()
                            .map(|name| view! { <option value=name>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Product Type"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g., Compostable Food Containers"
                        prop:value=product
                        on:input=move |ev| set_product(event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="form-grid form-grid--three">
                <label class="field">
                    <span class="field__label">"Quantity"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g., 5,000 units"
                        prop:value=quantity
                        on:input=move |ev| set_quantity(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Budget Range"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g., $2,000 - $3,000"
                        prop:value=budget
                        on:input=move |ev| set_budget(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Required Delivery"</span>
                    <input
                        class="field__input"
                        type="date"
                        prop:value=delivery
                        on:input=move |ev| set_delivery(event_target_value(&ev))
                    />
                </label>
            </div>

            <label class="field">
                <span class="field__label">"Special Requirements"</span>
                <textarea
                    class="field__input field__input--tall"
                    placeholder="Describe any specific requirements, certifications needed, or additional details..."
                    prop:value=requirements
                    on:input=move |ev| set_requirements(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="order-form__actions">
                <button class="btn btn--primary" type="submit">
                    "Send Request"
                </button>
                <button class="btn btn--outline" type="button" on:click=on_cancel>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

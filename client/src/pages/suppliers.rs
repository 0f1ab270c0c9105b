//! Supplier directory with category and location filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filters are page-local and reset when the user navigates away. A quote
//! request raises a toast only; nothing is sent anywhere.

use catalog::fixtures::{AVG_RESPONSE_TIME, PLATFORM_SUPPORT, SUPPLIERS};
use catalog::format::format_percent;
use catalog::stats::average_supplier_sustainability;
use catalog::{Icon, PageId, SupplierCategory, Tone};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::glyph::Glyph;
use crate::components::page_header::PageHeader;
use crate::components::supplier_card::SupplierCard;
use crate::components::tiles::FigureTile;
use crate::components::toaster::notify;
use crate::state::suppliers::SupplierFilterState;
use crate::state::toast::{QUOTE_SENT_TITLE, ToastState, quote_sent_description};
use crate::util::style::toggle_button_class;

#[component]
pub fn SuppliersPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let filters = RwSignal::new(SupplierFilterState::default());
    let visible = Memo::new(move |_| filters.with(SupplierFilterState::visible));

    let on_quote = Callback::new(move |name: &'static str| {
        notify(toasts, QUOTE_SENT_TITLE, &quote_sent_description(name));
    });

    let page = PageId::Suppliers;
    view! {
        <section class="page page--suppliers" data-page=page.id()>
            <PageHeader page=page/>

            <section class="card filter-bar">
                <label class="search-field">
                    <Glyph icon=Icon::Search class="search-field__icon"/>
                    <input
                        class="field__input search-field__input"
                        type="search"
                        aria-label="Location"
                        placeholder="Enter your location (e.g., San Francisco, CA)"
                        prop:value=move || filters.with(|f| f.location.clone())
                        on:input=move |ev| filters.update(|f| f.set_location(event_target_value(&ev)))
                    />
                </label>
                <div class="filter-bar__options" role="group" aria-label="Category">
                    {SupplierCategory::ALL
                        .into_iter()
                        .map(|category| {
                            let active = move || filters.with(|f| f.category == category);
                            view! {
                                <button
                                    class=move || toggle_button_class("chip", active())
                                    aria-pressed=move || active().to_string()
                                    data-category=category.id()
                                    on:click=move |_| filters.update(|f| f.select_category(category))
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <div class="supplier-grid">
                {move || {
                    let suppliers = visible.get();
                    if suppliers.is_empty() {
                        return vec![
                            view! {
                                <p class="empty-state">"No suppliers match these filters."</p>
                            }
                                .into_any(),
                        ];
                    }
                    suppliers
                        .into_iter()
                        .map(|supplier| view! { <SupplierCard supplier=supplier on_quote=on_quote/> }.into_any())
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="tile-grid tile-grid--four">
                <FigureTile value=SUPPLIERS.len().to_string() label="Verified Suppliers" tone=Tone::Primary/>
                <FigureTile value=PLATFORM_SUPPORT label="Platform Support" tone=Tone::Success/>
                <FigureTile
                    value=format_percent(average_supplier_sustainability(SUPPLIERS))
                    label="Avg Sustainability"
                    tone=Tone::Warning
                />
                <FigureTile value=AVG_RESPONSE_TIME label="Avg Response Time" tone=Tone::PrimaryLight/>
            </div>
        </section>
    }
}

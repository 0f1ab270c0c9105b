//! Supplier directory card.

#[cfg(test)]
#[path = "supplier_card_test.rs"]
mod supplier_card_test;

use catalog::format::{format_currency, format_distance, format_rating, format_thousands};
use catalog::{Icon, Supplier};
use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::components::score_bar::ScoreBar;

/// `mailto:` link for a supplier's contact address.
pub fn mailto_href(supplier: &Supplier) -> String {
    format!("mailto:{}?subject=EcoPack360%20inquiry", supplier.contact.email)
}

/// Location line, e.g. `"San Francisco, CA • 12 miles"`.
pub fn location_line(supplier: &Supplier) -> String {
    format!("{} • {}", supplier.location, format_distance(supplier.distance_miles))
}

/// Card for one supplier. `on_quote` receives the supplier name.
#[component]
pub fn SupplierCard(supplier: &'static Supplier, on_quote: Callback<&'static str>) -> impl IntoView {
    let name = supplier.name;
    view! {
        <article class="card supplier-card" data-supplier-id=supplier.id.to_string()>
            <header class="supplier-card__header">
                <div>
                    <h2 class="supplier-card__name">{name}</h2>
                    <p class="supplier-card__location">
                        <Glyph icon=Icon::MapPin/>
                        {location_line(supplier)}
                    </p>
                </div>
                <div class="supplier-card__rating">
                    <Glyph icon=Icon::Star class="supplier-card__star"/>
                    <span class="supplier-card__rating-value">{format_rating(supplier.rating)}</span>
                    <span class="supplier-card__reviews">{format!("({})", format_thousands(supplier.reviews))}</span>
                </div>
            </header>

            <p class="supplier-card__description">{supplier.description}</p>

            <div class="tag-list">
                {supplier
                    .specialties
                    .iter()
                    .map(|specialty| view! { <span class="tag tag--accent">{*specialty}</span> })
                    .collect::<Vec<_>>()}
            </div>

            <dl class="supplier-card__terms">
                <div>
                    <dt>"Min Order:"</dt>
                    <dd>{format_currency(supplier.min_order)}</dd>
                </div>
                <div>
                    <dt>"Lead Time:"</dt>
                    <dd>{supplier.lead_time}</dd>
                </div>
            </dl>

            <ScoreBar percent=supplier.sustainability/>

            <div class="tag-list">
                {supplier
                    .certifications
                    .iter()
                    .map(|cert| {
                        view! {
                            <span class="tag tag--outline">
                                <Glyph icon=Icon::Leaf class="tag__icon"/>
                                {*cert}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="supplier-card__actions">
                <button class="btn btn--primary btn--grow" on:click=move |_| on_quote.run(name)>
                    <Glyph icon=Icon::Package/>
                    "Request Quote"
                </button>
                <a class="btn btn--outline" href=mailto_href(supplier) title=supplier.contact.phone>
                    <Glyph icon=Icon::Mail/>
                    "Contact"
                </a>
            </div>
        </article>
    }
}

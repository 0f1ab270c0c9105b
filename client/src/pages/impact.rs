//! Environmental impact page. Entirely static fixture content.

use catalog::fixtures::{CARBON_EMISSIONS, CERTIFICATIONS, IMPACT_METRICS, MONTHLY_SUMMARY, REDUCTION_BY_CATEGORY, WASTE_BREAKDOWN};
use catalog::{Icon, PageId, Tone};
use leptos::prelude::*;

use crate::components::charts::{AreaChart, PieChart, RowChart, Series, Slice};
use crate::components::glyph::Glyph;
use crate::components::page_header::PageHeader;
use crate::components::tiles::MetricTile;

fn carbon_series() -> Vec<Series> {
    vec![
        Series {
            name: "Traditional",
            values: CARBON_EMISSIONS.iter().map(|p| f64::from(p.traditional)).collect(),
            tone: Tone::Danger,
        },
        Series {
            name: "Biodegradable",
            values: CARBON_EMISSIONS.iter().map(|p| f64::from(p.biodegradable)).collect(),
            tone: Tone::Primary,
        },
    ]
}

#[component]
pub fn ImpactPage() -> impl IntoView {
    let page = PageId::Impact;
    let months = CARBON_EMISSIONS.iter().map(|p| p.month).collect::<Vec<_>>();
    let slices = WASTE_BREAKDOWN
        .iter()
        .map(|w| Slice { name: w.name, value: f64::from(w.percent), tone: w.tone })
        .collect::<Vec<_>>();
    let categories = REDUCTION_BY_CATEGORY.iter().map(|r| r.category).collect::<Vec<_>>();
    let reductions = REDUCTION_BY_CATEGORY.iter().map(|r| f64::from(r.reduction)).collect::<Vec<_>>();

    view! {
        <section class="page page--impact" data-page=page.id()>
            <PageHeader page=page/>

            <div class="tile-grid tile-grid--four">
                {IMPACT_METRICS.iter().map(|metric| view! { <MetricTile metric=metric/> }).collect::<Vec<_>>()}
            </div>

            <div class="split">
                <section class="card chart-card">
                    <header class="card__header">
                        <h2 class="card__title">
                            <Glyph icon=Icon::Leaf/>
                            "Carbon Emissions Comparison"
                        </h2>
                        <p class="card__description">"Monthly CO₂ emissions: Traditional vs Biodegradable packaging"</p>
                    </header>
                    <AreaChart labels=months series=carbon_series() unit="kg CO₂"/>
                </section>

                <section class="card chart-card">
                    <header class="card__header">
                        <h2 class="card__title">
                            <Glyph icon=Icon::Recycle/>
                            "Waste Reduction Breakdown"
                        </h2>
                        <p class="card__description">"Distribution of environmental benefits this month"</p>
                    </header>
                    <PieChart slices=slices unit="%"/>
                </section>
            </div>

            <section class="card chart-card">
                <header class="card__header">
                    <h2 class="card__title">
                        <Glyph icon=Icon::TrendingUp/>
                        "Environmental Impact by Package Type"
                    </h2>
                    <p class="card__description">
                        "Percentage reduction in environmental impact compared to traditional packaging"
                    </p>
                </header>
                <RowChart labels=categories values=reductions tone=Tone::Success unit="%"/>
            </section>

            <div class="split">
                <section class="card">
                    <header class="card__header">
                        <h2 class="card__title">
                            <Glyph icon=Icon::Award/>
                            "Environmental Certifications"
                        </h2>
                        <p class="card__description">"Recognized achievements in sustainable packaging"</p>
                    </header>
                    <ul class="cert-list">
                        {CERTIFICATIONS
                            .iter()
                            .map(|cert| {
                                view! {
                                    <li class="cert-list__item">
                                        <span class="cert-list__badge">
                                            <Glyph icon=Icon::Award/>
                                        </span>
                                        <div>
                                            <h3 class="cert-list__name">{cert.name}</h3>
                                            <p class="cert-list__description">{cert.description}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>

                <section class="card card--hero impact-summary">
                    <h2 class="card__title">
                        <Glyph icon=Icon::Leaf/>
                        "Monthly Impact Summary"
                    </h2>
                    <div class="impact-summary__grid">
                        {MONTHLY_SUMMARY
                            .iter()
                            .map(|figure| {
                                view! {
                                    <div class="impact-summary__figure">
                                        <p class="impact-summary__value">{figure.value}</p>
                                        <p class="impact-summary__label">{figure.label}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p class="impact-summary__note">
                        "Your choices have prevented "
                        <strong>"2.4 tons of CO₂"</strong>
                        " from entering the atmosphere. That's equivalent to planting "
                        <strong>"112 trees"</strong>
                        "!"
                    </p>
                </section>
            </div>
        </section>
    }
}

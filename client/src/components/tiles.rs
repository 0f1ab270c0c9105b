//! Summary tiles: dashboard stat cards, impact metrics and plain figures.

use catalog::{ImpactMetric, StatCard, Tone};
use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::util::style::tone_class;

/// Dashboard headline number with an icon badge.
#[component]
pub fn StatTile(card: &'static StatCard) -> impl IntoView {
    view! {
        <article class="card stat-tile">
            <div class="stat-tile__body">
                <p class="stat-tile__title">{card.title}</p>
                <p class="stat-tile__value">{card.value}</p>
                <p class="stat-tile__description">{card.description}</p>
            </div>
            <div class=tone_class("stat-tile__icon", card.tone)>
                <Glyph icon=card.icon/>
            </div>
        </article>
    }
}

/// Impact metric with unit and month-over-month change.
#[component]
pub fn MetricTile(metric: &'static ImpactMetric) -> impl IntoView {
    view! {
        <article class="card metric-tile">
            <div class="metric-tile__header">
                <div class=tone_class("metric-tile__icon", metric.tone)>
                    <Glyph icon=metric.icon/>
                </div>
                <span class="metric-tile__change">{metric.change}</span>
            </div>
            <p class="metric-tile__value">
                {metric.value}
                <span class="metric-tile__unit">{metric.unit}</span>
            </p>
            <p class="metric-tile__title">{metric.title}</p>
        </article>
    }
}

/// Large value over a caption, used for page-level quick stats.
#[component]
pub fn FigureTile(
    #[prop(into)] value: String,
    label: &'static str,
    #[prop(optional)] tone: Tone,
) -> impl IntoView {
    view! {
        <article class="card figure-tile">
            <p class=tone_class("figure-tile__value", tone)>{value}</p>
            <p class="figure-tile__label">{label}</p>
        </article>
    }
}

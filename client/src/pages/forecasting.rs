//! AI forecasting page: data inputs, a simulated model run and fixed results.
//!
//! SYSTEM CONTEXT
//! ==============
//! The inputs are collected but never parsed. "Generate Forecast" starts a run
//! that completes after `FORECAST_DELAY_MS`; the results are always the same
//! fixture series. The timer only exists in the browser build.

use catalog::fixtures::{DEMAND_FORECAST, EXPECTED_GROWTH, HISTORICAL_DEMAND, PACKAGE_TYPE_DEMAND, PEAK_DEMAND};
use catalog::format::format_percent;
use catalog::stats::average_confidence;
use catalog::{Icon, PageId, Tone};
use leptos::prelude::*;

use crate::components::charts::{ColumnChart, LineChart, Series};
use crate::components::glyph::Glyph;
use crate::components::page_header::PageHeader;
use crate::components::tiles::FigureTile;
use crate::state::forecast::ForecastState;

#[cfg(feature = "hydrate")]
fn schedule_completion(forecast: RwSignal<ForecastState>, run: u64) {
    use crate::state::forecast::FORECAST_DELAY_MS;

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(FORECAST_DELAY_MS)).await;
        // Leaving the page disposes the signal before the timer fires.
        if forecast.try_update(|f| f.finish(run)) == Some(true) {
            log::info!("forecast run {run} complete");
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_completion(_forecast: RwSignal<ForecastState>, _run: u64) {}

#[cfg(feature = "hydrate")]
fn log_run_inputs(run: u64, manual_data: &str, business_type: &str) {
    log::info!(
        "forecast run {run} started: {} manual lines, business type {:?}",
        manual_data.lines().filter(|l| !l.trim().is_empty()).count(),
        business_type.trim()
    );
}

#[cfg(not(feature = "hydrate"))]
fn log_run_inputs(_run: u64, _manual_data: &str, _business_type: &str) {}

#[component]
pub fn ForecastingPage() -> impl IntoView {
    let forecast = RwSignal::new(ForecastState::default());
    let manual_data = RwSignal::new(String::new());
    let business_type = RwSignal::new(String::new());

    let loading = Memo::new(move |_| forecast.get().loading);
    let show_results = Memo::new(move |_| forecast.get().show_results);

    let on_generate = move |_| {
        let mut started = None;
        forecast.update(|f| started = f.begin());
        let Some(run) = started else {
            return;
        };
        log_run_inputs(run, &manual_data.get_untracked(), &business_type.get_untracked());
        schedule_completion(forecast, run);
    };

    let page = PageId::Forecasting;
    view! {
        <section class="page page--forecasting" data-page=page.id()>
            <PageHeader page=page/>

            <div class="forecast-layout">
                <section class="card forecast-input">
                    <header class="card__header">
                        <h2 class="card__title">
                            <Glyph icon=Icon::Upload/>
                            "Data Input"
                        </h2>
                        <p class="card__description">"Provide historical sales data for accurate forecasting"</p>
                    </header>

                    <label class="field">
                        <span class="field__label">"Upload CSV File"</span>
                        <input class="field__input" id="csv-upload" type="file" accept=".csv"/>
                        <span class="field__hint">"Format: Date, Product, Quantity, Revenue"</span>
                    </label>

                    <p class="forecast-input__divider">"— OR —"</p>

                    <label class="field">
                        <span class="field__label">"Manual Data Entry"</span>
                        <textarea
                            class="field__input field__input--tall"
                            id="manual-data"
                            placeholder="Enter your monthly sales data:\nJan: 1200 units\nFeb: 1350 units\nMar: 1500 units..."
                            prop:value=move || manual_data.get()
                            on:input=move |ev| manual_data.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="field">
                        <span class="field__label">"Business Type"</span>
                        <input
                            class="field__input"
                            id="business-type"
                            type="text"
                            placeholder="e.g., Food & Beverage, E-commerce"
                            prop:value=move || business_type.get()
                            on:input=move |ev| business_type.set(event_target_value(&ev))
                        />
                    </label>

                    <button
                        class="btn btn--primary btn--block"
                        disabled=move || loading.get()
                        on:click=on_generate
                    >
                        <Glyph icon=Icon::Brain/>
                        {move || forecast.get().button_label()}
                    </button>
                </section>

                <div class="forecast-results">
                    <Show when=move || show_results.get() fallback=|| view! { <ReadyPlaceholder/> }>
                        <ForecastResults/>
                    </Show>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ReadyPlaceholder() -> impl IntoView {
    view! {
        <section class="card placeholder">
            <Glyph icon=Icon::Brain class="placeholder__icon"/>
            <h2 class="placeholder__title">"Ready for AI Analysis"</h2>
            <p class="placeholder__text">
                "Upload your data or enter it manually to generate accurate demand forecasts"
            </p>
        </section>
    }
}

#[component]
fn ForecastResults() -> impl IntoView {
    let confidence = format_percent(average_confidence(DEMAND_FORECAST));
    let forecast_caption = format!("Predicted packaging needs with {confidence} average confidence");
    let forecast_labels = DEMAND_FORECAST.iter().map(|p| p.month).collect::<Vec<_>>();
    let forecast_series = vec![Series {
        name: "Predicted Demand",
        values: DEMAND_FORECAST.iter().map(|p| f64::from(p.predicted)).collect(),
        tone: Tone::Primary,
    }];
    let history_labels = HISTORICAL_DEMAND.iter().map(|p| p.month).collect::<Vec<_>>();
    let history_series = vec![
        Series {
            name: "Actual",
            values: HISTORICAL_DEMAND.iter().map(|p| f64::from(p.actual)).collect(),
            tone: Tone::Secondary,
        },
        Series {
            name: "Predicted",
            values: HISTORICAL_DEMAND.iter().map(|p| f64::from(p.predicted)).collect(),
            tone: Tone::Primary,
        },
    ];
    let type_labels = PACKAGE_TYPE_DEMAND.iter().map(|p| p.kind).collect::<Vec<_>>();
    let type_values = PACKAGE_TYPE_DEMAND.iter().map(|p| f64::from(p.demand)).collect::<Vec<_>>();

    view! {
        <section class="card chart-card">
            <header class="card__header">
                <h2 class="card__title">
                    <Glyph icon=Icon::TrendingUp/>
                    "6-Month Demand Forecast"
                </h2>
                <p class="card__description">
                    {forecast_caption}
                </p>
            </header>
            <LineChart labels=forecast_labels series=forecast_series unit="units"/>
        </section>

        <section class="card chart-card">
            <header class="card__header">
                <h2 class="card__title">
                    <Glyph icon=Icon::CheckCircle/>
                    "Historical Accuracy"
                </h2>
                <p class="card__description">"Actual demand against model predictions, last six months"</p>
            </header>
            <LineChart labels=history_labels series=history_series height=250.0 unit="units"/>
        </section>

        <section class="card chart-card">
            <header class="card__header">
                <h2 class="card__title">
                    <Glyph icon=Icon::Package/>
                    "Packaging Type Breakdown"
                </h2>
                <p class="card__description">"Predicted demand by packaging category (next month)"</p>
            </header>
            <ColumnChart labels=type_labels values=type_values tone=Tone::Primary unit="thousand units"/>
        </section>

        <div class="tile-grid tile-grid--three">
            <FigureTile value=EXPECTED_GROWTH label="Growth Expected" tone=Tone::Success/>
            <FigureTile value=confidence label="Avg Confidence" tone=Tone::Primary/>
            <FigureTile value=PEAK_DEMAND label="Peak Demand" tone=Tone::Warning/>
        </div>
    }
}

//! SVG chart components: line, area, column, row and pie.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forecasting and impact pages plot small fixture series. Charts are drawn
//! once from plain vectors; none of them subscribe to signals, so a chart only
//! re-renders when its parent view is rebuilt.
//!
//! DESIGN
//! ======
//! Geometry lives in `util::chart`; this module only turns rectangles and
//! paths into markup. Every data mark carries an SVG `<title>` so hovering
//! shows the exact value.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use catalog::Tone;
use leptos::prelude::*;

use crate::util::chart::{
    Plot, area_path, column_bars, line_path, nice_max, pie_slices, row_bars, row_center, series_points,
    tick_label, ticks,
};
use crate::util::style::tone_color;

/// ViewBox width shared by the cartesian charts; height varies per chart.
pub const CHART_WIDTH: f64 = 600.0;

/// Horizontal gridlines drawn between zero and the axis maximum.
const GRID_SEGMENTS: usize = 4;

/// Left gutter reserved for category names on row charts.
const ROW_LABEL_GUTTER: f64 = 120.0;

/// One named line or area.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub values: Vec<f64>,
    pub tone: Tone,
}

/// One pie wedge.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub name: &'static str,
    pub value: f64,
    pub tone: Tone,
}

/// Hover text for a data mark, e.g. `"Jan: 210 units"` or `"Food Packaging: 85%"`.
pub fn point_tooltip(label: &str, value: f64, unit: &str) -> String {
    let value = tick_label(value);
    if unit.is_empty() {
        format!("{label}: {value}")
    } else if unit.starts_with('%') {
        format!("{label}: {value}{unit}")
    } else {
        format!("{label}: {value} {unit}")
    }
}

/// Largest value across every series, or zero when all are empty.
pub fn series_max(series: &[Series]) -> f64 {
    series.iter().flat_map(|s| s.values.iter().copied()).fold(0.0, f64::max)
}

/// SVG coordinate with one decimal.
pub fn coord(value: f64) -> String {
    format!("{value:.1}")
}

pub fn view_box(width: f64, height: f64) -> String {
    format!("0 0 {} {}", coord(width), coord(height))
}

/// Gridlines with value labels plus one category label per band.
fn axes(plot: Plot, max: f64, labels: &[&'static str]) -> impl IntoView + use<> {
    let right = plot.width - plot.right;
    let grid = ticks(max, GRID_SEGMENTS)
        .into_iter()
        .map(|tick| {
            let y = coord(plot.y_for(tick, max));
            view! {
                <g class="chart__tick">
                    <line class="chart__grid" x1=coord(plot.left) y1=y.clone() x2=coord(right) y2=y.clone()></line>
                    <text
                        class="chart__tick-label"
                        x=coord(plot.left - 8.0)
                        y=y
                        text-anchor="end"
                        dominant-baseline="middle"
                    >
                        {tick_label(tick)}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();
    let count = labels.len();
    let categories = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text
                    class="chart__axis-label"
                    x=coord(plot.x_center(i, count))
                    y=coord(plot.height - 10.0)
                    text-anchor="middle"
                >
                    {*label}
                </text>
            }
        })
        .collect::<Vec<_>>();
    view! { <g class="chart__axes">{grid}{categories}</g> }
}

fn legend(entries: Vec<(String, Tone)>) -> impl IntoView {
    view! {
        <figcaption class="chart__legend">
            {entries
                .into_iter()
                .map(|(name, tone)| {
                    view! {
                        <span class="chart__legend-item">
                            <span class="chart__swatch" style=format!("background: {}", tone_color(tone))></span>
                            {name}
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </figcaption>
    }
}

fn trend_chart(labels: &[&'static str], series: &[Series], height: f64, unit: &'static str, area: bool) -> impl IntoView + use<> {
    let plot = Plot::new(CHART_WIDTH, height);
    let max = nice_max(series_max(series));
    let named = series.len() > 1;
    let layers = series
        .iter()
        .map(|s| {
            let points = series_points(&plot, &s.values, max);
            let color = tone_color(s.tone);
            let fill = area.then(|| {
                view! {
                    <path
                        class="chart__area"
                        d=area_path(&points, plot.baseline())
                        fill=color.clone()
                        fill-opacity="0.3"
                        stroke="none"
                    ></path>
                }
            });
            let markers = points
                .iter()
                .zip(&s.values)
                .zip(labels)
                .map(|(((x, y), value), label)| {
                    let label = if named { format!("{label} {}", s.name) } else { (*label).to_owned() };
                    view! {
                        <circle class="chart__point" cx=coord(*x) cy=coord(*y) r="4" fill=color.clone()>
                            <title>{point_tooltip(&label, *value, unit)}</title>
                        </circle>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <g class="chart__series" data-series=s.name>
                    {fill}
                    <path class="chart__line" d=line_path(&points) fill="none" stroke=color.clone() stroke-width="3"></path>
                    {markers}
                </g>
            }
        })
        .collect::<Vec<_>>();
    let entries = named.then(|| legend(series.iter().map(|s| (s.name.to_owned(), s.tone)).collect()));
    let kind = if area { "chart chart--area" } else { "chart chart--line" };
    view! {
        <figure class=kind>
            <svg class="chart__svg" viewBox=view_box(plot.width, plot.height) role="img">
                {axes(plot, max, labels)}
                {layers}
            </svg>
            {entries}
        </figure>
    }
}

/// Lines over category labels. A legend is shown for more than one series.
#[component]
pub fn LineChart(
    labels: Vec<&'static str>,
    series: Vec<Series>,
    #[prop(default = 300.0)] height: f64,
    #[prop(optional)] unit: &'static str,
) -> impl IntoView {
    trend_chart(&labels, &series, height, unit, false)
}

/// Filled lines over category labels, drawn in series order.
#[component]
pub fn AreaChart(
    labels: Vec<&'static str>,
    series: Vec<Series>,
    #[prop(default = 300.0)] height: f64,
    #[prop(optional)] unit: &'static str,
) -> impl IntoView {
    trend_chart(&labels, &series, height, unit, true)
}

/// Vertical bars, one per label.
#[component]
pub fn ColumnChart(
    labels: Vec<&'static str>,
    values: Vec<f64>,
    tone: Tone,
    #[prop(default = 250.0)] height: f64,
    #[prop(optional)] unit: &'static str,
) -> impl IntoView {
    let plot = Plot::new(CHART_WIDTH, height);
    let max = nice_max(values.iter().copied().fold(0.0, f64::max));
    let color = tone_color(tone);
    let bars = column_bars(&plot, &values, max)
        .into_iter()
        .zip(&values)
        .zip(&labels)
        .map(|((bar, value), label)| {
            view! {
                <rect
                    class="chart__bar"
                    x=coord(bar.x)
                    y=coord(bar.y)
                    width=coord(bar.width)
                    height=coord(bar.height)
                    rx="4"
                    fill=color.clone()
                >
                    <title>{point_tooltip(label, *value, unit)}</title>
                </rect>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <figure class="chart chart--column">
            <svg class="chart__svg" viewBox=view_box(plot.width, plot.height) role="img">
                {axes(plot, max, &labels)}
                {bars}
            </svg>
        </figure>
    }
}

/// Horizontal bars on a fixed `0..=max` scale with category names on the left.
#[component]
pub fn RowChart(
    labels: Vec<&'static str>,
    values: Vec<f64>,
    tone: Tone,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 250.0)] height: f64,
    #[prop(optional)] unit: &'static str,
) -> impl IntoView {
    let plot = Plot::new(CHART_WIDTH, height).with_left(ROW_LABEL_GUTTER);
    let color = tone_color(tone);
    let count = labels.len();
    let grid = ticks(max, GRID_SEGMENTS)
        .into_iter()
        .map(|tick| {
            let ratio = if max > 0.0 { tick / max } else { 0.0 };
            let x = coord(plot.left + plot.inner_width() * ratio);
            view! {
                <g class="chart__tick">
                    <line class="chart__grid" x1=x.clone() y1=coord(plot.top) x2=x.clone() y2=coord(plot.baseline())></line>
                    <text class="chart__tick-label" x=x y=coord(plot.height - 10.0) text-anchor="middle">
                        {tick_label(tick)}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();
    let rows = row_bars(&plot, &values, max)
        .into_iter()
        .zip(&values)
        .zip(&labels)
        .enumerate()
        .map(|(i, ((bar, value), label))| {
            view! {
                <g class="chart__row">
                    <text
                        class="chart__axis-label"
                        x=coord(plot.left - 8.0)
                        y=coord(row_center(&plot, i, count))
                        text-anchor="end"
                        dominant-baseline="middle"
                    >
                        {*label}
                    </text>
                    <rect
                        class="chart__bar"
                        x=coord(bar.x)
                        y=coord(bar.y)
                        width=coord(bar.width)
                        height=coord(bar.height)
                        rx="4"
                        fill=color.clone()
                    >
                        <title>{point_tooltip(label, *value, unit)}</title>
                    </rect>
                </g>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <figure class="chart chart--row">
            <svg class="chart__svg" viewBox=view_box(plot.width, plot.height) role="img">
                {grid}
                {rows}
            </svg>
        </figure>
    }
}

/// Pie with percent labels inside each wedge and a legend listing each value.
#[component]
pub fn PieChart(slices: Vec<Slice>, #[prop(default = 250.0)] size: f64, #[prop(optional)] unit: &'static str) -> impl IntoView {
    let center = size / 2.0;
    let radius = center - 10.0;
    let values = slices.iter().map(|s| s.value).collect::<Vec<_>>();
    let wedges = pie_slices(&values, center, center, radius)
        .into_iter()
        .zip(&slices)
        .map(|(wedge, slice)| {
            view! {
                <g class="chart__slice">
                    <path class="chart__wedge" d=wedge.path fill=tone_color(slice.tone)>
                        <title>{point_tooltip(slice.name, slice.value, unit)}</title>
                    </path>
                    <text
                        class="chart__slice-label"
                        x=coord(wedge.label_x)
                        y=coord(wedge.label_y)
                        text-anchor="middle"
                        dominant-baseline="middle"
                    >
                        {format!("{:.0}%", wedge.fraction * 100.0)}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();
    let entries = slices.iter().map(|s| (point_tooltip(s.name, s.value, unit), s.tone)).collect();
    view! {
        <figure class="chart chart--pie">
            <svg class="chart__svg" viewBox=view_box(size, size) role="img">
                {wedges}
            </svg>
            {legend(entries)}
        </figure>
    }
}

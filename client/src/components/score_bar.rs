//! Sustainability score meter.

use leptos::prelude::*;

use crate::util::style::percent_width;

/// Horizontal meter filled to `percent`. Compact bars drop the caption row.
#[component]
pub fn ScoreBar(percent: u8, #[prop(optional)] compact: bool) -> impl IntoView {
    let caption = (!compact).then(|| {
        view! {
            <div class="score-bar__caption">
                <span>"Sustainability Score"</span>
                <span class="score-bar__value">{format!("{percent}%")}</span>
            </div>
        }
    });
    let class = if compact { "score-bar score-bar--compact" } else { "score-bar" };
    view! {
        <div class=class>
            {caption}
            <div
                class="score-bar__track"
                role="meter"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=percent.to_string()
            >
                <div class="score-bar__fill" style=percent_width(percent)></div>
            </div>
        </div>
    }
}

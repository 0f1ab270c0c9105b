//! Order status pill.

use catalog::OrderStatus;
use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::util::style::tone_class;

#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <span class=tone_class("badge", status.tone()) data-status=status.id()>
            <Glyph icon=status.icon() class="badge__icon"/>
            {status.label()}
        </span>
    }
}

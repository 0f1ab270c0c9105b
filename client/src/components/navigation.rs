//! Top navigation bar with brand, page buttons and a mobile drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the current page and drawer state from `UiState`. Page changes are
//! reported through `on_page_change`; the shell applies them, which also
//! closes the drawer.

use catalog::{Icon, PageId};
use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::state::ui::UiState;
use crate::util::style::toggle_button_class;

/// One button per page, highlighted when it is the current page.
fn nav_items(variant: &'static str, current: Memo<PageId>, on_page_change: Callback<PageId>) -> impl IntoView {
    PageId::ALL
        .into_iter()
        .map(|page| {
            let class = move || toggle_button_class(variant, current.get() == page);
            let aria_current = move || (current.get() == page).then_some("page");
            view! {
                <button
                    class=class
                    data-page-target=page.id()
                    aria-current=aria_current
                    on:click=move |_| on_page_change.run(page)
                >
                    {page.label()}
                </button>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn Navigation(on_page_change: Callback<PageId>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let current = Memo::new(move |_| ui.get().page);
    let menu_open = Memo::new(move |_| ui.get().menu_open);

    let on_toggle_menu = move |_| ui.update(UiState::toggle_menu);
    let on_close_menu = move |_| ui.update(UiState::close_menu);

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <div class="nav__brand">
                    <div class="nav__logo">
                        <Glyph icon=Icon::Leaf/>
                    </div>
                    <div class="nav__brand-text">
                        <span class="nav__title">"EcoPack360"</span>
                        <span class="nav__tagline">"AI-Powered Packaging Platform"</span>
                    </div>
                </div>

                <div class="nav__items">{nav_items("nav__item", current, on_page_change)}</div>

                <button
                    class="nav__menu-toggle"
                    aria-label="Open navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=on_toggle_menu
                >
                    <Glyph icon=Icon::Menu/>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav__overlay" on:click=on_close_menu></div>
                <aside class="nav__drawer">{nav_items("nav__drawer-item", current, on_page_change)}</aside>
            </Show>
        </nav>
    }
}

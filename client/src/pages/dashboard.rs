//! Landing page: hero, headline stats, quick actions and platform benefits.

use catalog::fixtures::{BENEFITS, DASHBOARD_STATS, QUICK_ACTIONS};
use catalog::{Icon, PageId};
use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::components::tiles::StatTile;
use crate::util::style::tone_class;

/// Quick-action cards call `on_navigate` with their target page.
#[component]
pub fn DashboardPage(on_navigate: Callback<PageId>) -> impl IntoView {
    let page = PageId::Dashboard;

    view! {
        <section class="page page--dashboard" data-page=page.id()>
            <header class="hero">
                <h1 class="hero__title">{page.heading()}</h1>
                <p class="hero__subtitle">{page.subtitle()}</p>
            </header>

            <div class="tile-grid tile-grid--four">
                {DASHBOARD_STATS.iter().map(|card| view! { <StatTile card=card/> }).collect::<Vec<_>>()}
            </div>

            <section class="quick-actions">
                <h2 class="section-title">"Quick Actions"</h2>
                <div class="quick-actions__grid">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|action| {
                            let target = action.target;
                            view! {
                                <button
                                    class=format!("card {}", tone_class("quick-action", action.tone))
                                    data-page-target=target.id()
                                    on:click=move |_| on_navigate.run(target)
                                >
                                    <span class="quick-action__text">
                                        <span class="quick-action__title">{action.title}</span>
                                        <span class="quick-action__description">{action.description}</span>
                                    </span>
                                    <Glyph icon=Icon::ArrowRight class="quick-action__arrow"/>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="card benefits">
                <h2 class="card__title">"Why Choose EcoPack360?"</h2>
                <div class="benefits__grid">
                    {BENEFITS
                        .iter()
                        .map(|benefit| {
                            view! {
                                <div class="benefit">
                                    <div class="benefit__icon">
                                        <Glyph icon=benefit.icon/>
                                    </div>
                                    <h3 class="benefit__title">{benefit.title}</h3>
                                    <p class="benefit__description">{benefit.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </section>
    }
}

//! Title block at the top of each page.

use catalog::PageId;
use leptos::prelude::*;

/// Heading and subtitle for `page`, with optional trailing actions.
///
/// This is the only `<h1>` a page renders.
#[component]
pub fn PageHeader(page: PageId, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="page__header">
            <div class="page__titles">
                <h1 class="page__title">{page.heading()}</h1>
                <p class="page__subtitle">{page.subtitle()}</p>
            </div>
            {children.map(|actions| view! { <div class="page__actions">{actions()}</div> })}
        </header>
    }
}

//! Toast viewport and the helper pages use to raise notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Toasts live in the `ToastState` context provided by `App`. In the browser
//! each toast schedules its own dismissal; on the server toasts are never
//! raised because no event handler runs there.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Show a toast and schedule its automatic dismissal.
pub fn notify(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    let mut id = 0;
    toasts.update(|t| id = t.push(title, description));
    schedule_dismiss(toasts, id);
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    use crate::state::toast::TOAST_DURATION_MS;

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;
        // The toast may already be gone, evicted or closed by hand.
        if toasts.try_update(|t| t.dismiss(id)) == Some(true) {
            log::debug!("toast {id} expired");
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(_toasts: RwSignal<ToastState>, _id: u64) {}

/// Fixed-position stack of active toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <li class="toast" role="status">
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss notification"
                                    on:click=move |_| {
                                        toasts.update(|t| {
                                            t.dismiss(id);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ol>
    }
}

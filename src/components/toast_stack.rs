//! Timed notification toasts.

use leptos::prelude::*;

use crate::state::notify::{Notification, Notifications};

/// Renders every queued notification; each dismisses itself after its lifetime.
#[component]
pub fn ToastStack(notices: RwSignal<Notifications>) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || notices.with(|n| n.items().to_vec())
                key=|notification| notification.id
                children=move |notification| view! { <Toast notification=notification notices=notices/> }
            />
        </div>
    }
}

#[component]
fn Toast(notification: Notification, notices: RwSignal<Notifications>) -> impl IntoView {
    let id = notification.id;

    #[cfg(feature = "hydrate")]
    {
        let life = std::time::Duration::from_millis(u64::from(notification.life_ms));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(life).await;
            notices.update(|n| {
                n.dismiss(id);
            });
        });
    }

    let style = format!("background-color: {}; color: white;", notification.severity.color());

    view! {
        <div class=notification.severity.css_class() style=style role="status">
            <strong class="toast__summary">{notification.summary}</strong>
            <span class="toast__detail">{notification.detail}</span>
            <button
                class="toast__close"
                title="Dismiss"
                on:click=move |_| {
                    notices.update(|n| {
                        n.dismiss(id);
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}

//! Cage management page: table, create/edit dialog, delete confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the screen and notification signals and runs every REST call
//! in a local task. State changes go through the `begin_*`/`finish_*` halves
//! of [`CageScreen`] so no signal is borrowed across an `.await`.

use leptos::prelude::*;

use crate::components::cage_form_dialog::CageFormDialog;
use crate::components::cage_table::CageTable;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast_stack::ToastStack;
use crate::config::ApiConfig;
use crate::state::notify::Notifications;
use crate::sync::CageScreen;

/// Run `f` against the screen with the notification gateway alongside it.
fn with_screen<R>(
    screen: RwSignal<CageScreen>,
    notices: RwSignal<Notifications>,
    f: impl FnOnce(&mut CageScreen, &mut Notifications) -> R,
) -> Option<R> {
    let mut result = None;
    notices.update(|n| result = screen.try_update(|s| f(s, n)));
    result
}

#[cfg(feature = "hydrate")]
async fn refresh_list(screen: RwSignal<CageScreen>, api: &crate::net::api::HttpCageApi) {
    use crate::net::api::CageApi;

    let Some(ticket) = screen.try_update(CageScreen::begin_refresh) else {
        return;
    };
    let result = api.list_cages().await;
    screen.update(|s| {
        s.finish_refresh(ticket, result);
    });
}

/// Cage management page.
#[component]
pub fn ManageCagesPage() -> impl IntoView {
    let config = ApiConfig::from_env_or_default();
    let notices = RwSignal::new(Notifications::with_life_ms(config.notification_life_ms));
    let config = StoredValue::new(config);
    let screen = RwSignal::new(CageScreen::default());
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let Some(ticket) = screen.try_update(CageScreen::begin_load) else {
                return;
            };
            let api = crate::net::api::HttpCageApi::new(&config.get_value());
            let outcome = crate::sync::fetch_screen_data(&api).await;
            with_screen(screen, notices, |s, n| s.finish_load(ticket, outcome, n));
        });
    }

    let on_add = Callback::new(move |()| screen.update(CageScreen::open_create));
    let on_edit = Callback::new(move |id: i64| {
        let opened = screen.try_update(|s| s.open_edit(id)).unwrap_or(false);
        if !opened {
            leptos::logging::warn!("edit requested for unlisted cage id={id}");
        }
    });
    let on_delete = Callback::new(move |id: i64| screen.update(|s| s.request_delete(id)));
    let on_cancel_form = Callback::new(move |()| screen.update(CageScreen::close_form));

    let on_refresh = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpCageApi::new(&config.get_value());
                refresh_list(screen, &api).await;
            });
        }
    });

    let on_submit = Callback::new(move |()| {
        let Some(Ok(request)) = with_screen(screen, notices, |s, n| s.begin_submit(n)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpCageApi::new(&config.get_value());
                let result = request.send(&api).await;
                let refresh = with_screen(screen, notices, |s, n| s.finish_submit(&request, result, n)).unwrap_or(false);
                if refresh {
                    refresh_list(screen, &api).await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    });

    let on_confirm = Callback::new(move |()| {
        let Some(Some(action)) = screen.try_update(CageScreen::take_confirmed) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpCageApi::new(&config.get_value());
                let result = action.run(&api).await;
                let refresh = with_screen(screen, notices, |s, n| s.finish_action(action, result, n)).unwrap_or(false);
                if refresh {
                    refresh_list(screen, &api).await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = action;
    });

    view! {
        <div class="manage-cages-page">
            <ToastStack notices=notices/>
            <div class="manage-cages-page__body">
                <h1 class="manage-cages-page__title">"Cage Management"</h1>
                <CageTable
                    screen=screen
                    on_add=on_add
                    on_edit=on_edit
                    on_delete=on_delete
                    on_refresh=on_refresh
                />
            </div>
            <Show when=move || screen.with(|s| s.form.is_open())>
                <CageFormDialog screen=screen on_submit=on_submit on_cancel=on_cancel_form/>
            </Show>
            <ConfirmDialog screen=screen on_confirm=on_confirm/>
        </div>
    }
}

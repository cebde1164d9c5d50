//! Yes/No dialog for the screen's pending destructive action.

use leptos::prelude::*;

use crate::sync::CageScreen;

/// Confirmation dialog. Renders only while an action awaits an answer.
#[component]
pub fn ConfirmDialog(screen: RwSignal<CageScreen>, on_confirm: Callback<()>) -> impl IntoView {
    let on_cancel = move || screen.update(CageScreen::cancel_confirmation);

    view! {
        <Show when=move || screen.with(|s| s.confirm.is_awaiting())>
            <div class="dialog-backdrop" on:click=move |_| on_cancel()>
                <div class="dialog dialog--confirm" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Confirmation"</h2>
                    <p>{move || screen.with(|s| s.confirm.message().unwrap_or_default().to_owned())}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel()>
                            "No"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                            "Yes"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

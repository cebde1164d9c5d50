//! Modal dialog for creating or editing a cage.

#[cfg(test)]
#[path = "cage_form_dialog_test.rs"]
mod cage_form_dialog_test;

use leptos::prelude::*;

use crate::state::cage_form::{CageField, FormState};
use crate::sync::CageScreen;

fn dialog_title(form: &FormState) -> &'static str {
    match form {
        FormState::EditingExisting { .. } => "Update Cage",
        FormState::EditingNew(_) | FormState::Closed => "Add Cage",
    }
}

/// `<select>` value for an optional area id; empty means "no area".
fn area_option_value(area_id: Option<i64>) -> String {
    area_id.map(|id| id.to_string()).unwrap_or_default()
}

fn parse_area_option(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Create/edit dialog bound to the screen's single form slot.
#[component]
pub fn CageFormDialog(screen: RwSignal<CageScreen>, on_submit: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let field_value = move |field: CageField| {
        screen.with(|s| s.form.draft().map(|d| d.field(field).to_owned()).unwrap_or_default())
    };
    let set_field = move |field: CageField, value: String| {
        screen.update(|s| s.form.handle_field_change(field, value));
    };
    let submitting = move || screen.with(|s| s.form.is_submitting());
    let submit_blocked = move || screen.with(CageScreen::submit_pending);
    let cancel = move || {
        if !submitting() {
            on_cancel.run(());
        }
    };
    let session_error = move || screen.with(|s| s.form.session().and_then(|session| session.error.clone()));

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog dialog--cage" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || screen.with(|s| dialog_title(&s.form))}</h2>
                <label class="dialog__label">
                    "Cage Name"
                    <input
                        class="dialog__input"
                        type="text"
                        name=CageField::Name.name()
                        prop:value=move || field_value(CageField::Name)
                        on:input=move |ev| set_field(CageField::Name, event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Area"
                    <select
                        class="dialog__input"
                        name="areaId"
                        prop:value=move || {
                            area_option_value(screen.with(|s| s.form.draft().and_then(|d| d.area_id)))
                        }
                        on:change=move |ev| {
                            let area_id = parse_area_option(&event_target_value(&ev));
                            screen.update(|s| {
                                let area = area_id.and_then(|id| s.list.area(id).cloned());
                                s.form.handle_area_select(area.as_ref());
                            });
                        }
                    >
                        <option value="">"Select an Area"</option>
                        {move || {
                            screen
                                .with(|s| s.list.areas.clone())
                                .into_iter()
                                .map(|area| {
                                    view! { <option value=area.area_id.to_string()>{area.area_name}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Max Quantity"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="numeric"
                        name=CageField::MaxQuantity.name()
                        prop:value=move || field_value(CageField::MaxQuantity)
                        on:input=move |ev| set_field(CageField::MaxQuantity, event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        name=CageField::Description.name()
                        prop:value=move || field_value(CageField::Description)
                        on:input=move |ev| set_field(CageField::Description, event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || session_error().is_some()>
                    <p class="dialog__danger">{move || session_error().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" disabled=submitting on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=submit_blocked
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if submitting() { "Saving..." } else { "Submit" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

//! Searchable, paginated cage table with row actions.

#[cfg(test)]
#[path = "cage_table_test.rs"]
mod cage_table_test;

use leptos::prelude::*;

use crate::net::types::Cage;
use crate::state::cages::ListStatus;
use crate::state::filter::CageColumn;
use crate::state::pager::ROWS_PER_PAGE_OPTIONS;
use crate::sync::CageScreen;

/// Display text for each data column of a row, in table order.
fn row_cells(cage: &Cage) -> Vec<String> {
    CageColumn::ALL.iter().map(|col| col.cell(cage)).collect()
}

/// Placeholder text for the table body, or `None` when rows should render.
fn status_message(status: &ListStatus) -> Option<String> {
    match status {
        ListStatus::Loading => Some("Loading cages...".to_owned()),
        ListStatus::Error(message) => Some(format!("Could not load cages: {message}")),
        ListStatus::Empty => Some("No cages yet.".to_owned()),
        ListStatus::NoMatches => Some("No cages match the current filter.".to_owned()),
        ListStatus::Ready => None,
    }
}

/// Columns that get a filter box under their header.
const FILTERABLE_COLUMNS: [CageColumn; 1] = [CageColumn::Name];

fn filter_placeholder(column: CageColumn) -> Option<String> {
    FILTERABLE_COLUMNS
        .contains(&column)
        .then(|| format!("Filter by {}", column.header().to_lowercase()))
}

/// Cage table with toolbar, rows with edit/delete actions, and paginator.
#[component]
pub fn CageTable(
    screen: RwSignal<CageScreen>,
    on_add: Callback<()>,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let column_count = (CageColumn::ALL.len() + 1).to_string();

    view! {
        <div class="cage-table">
            <div class="cage-table__toolbar toolbar">
                <button class="btn btn--primary" on:click=move |_| on_add.run(())>
                    "+ Add"
                </button>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn"
                    disabled=move || screen.with(|s| !s.list.filters.is_active())
                    on:click=move |_| screen.update(|s| s.list.clear_filters())
                >
                    "Clear"
                </button>
                <input
                    class="cage-table__search"
                    type="text"
                    placeholder="Search by name"
                    prop:value=move || screen.with(|s| s.list.global_filter_text())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        screen.update(|s| s.list.apply_global_filter(&text));
                    }
                />
            </div>

            <Show when=move || screen.with(|s| s.list.areas_error.is_some())>
                <p class="cage-table__warning">
                    {move || {
                        screen
                            .with(|s| s.list.areas_error.clone())
                            .map(|e| format!("Areas unavailable: {e}"))
                            .unwrap_or_default()
                    }}
                </p>
            </Show>

            <table class="cage-table__grid">
                <thead>
                    <tr>
                        {CageColumn::ALL.iter().map(|col| view! { <th>{col.header()}</th> }).collect::<Vec<_>>()}
                        <th class="cage-table__actions">"Actions"</th>
                    </tr>
                    <tr class="cage-table__filters">
                        {CageColumn::ALL
                            .iter()
                            .map(|&col| match filter_placeholder(col) {
                                Some(placeholder) => view! {
                                    <th>
                                        <input
                                            class="cage-table__filter"
                                            type="text"
                                            placeholder=placeholder
                                            prop:value=move || screen.with(|s| s.list.column_filter_text(col))
                                            on:input=move |ev| {
                                                let text = event_target_value(&ev);
                                                screen.update(|s| s.list.set_column_filter(col, &text));
                                            }
                                        />
                                    </th>
                                }
                                    .into_any(),
                                None => view! { <th></th> }.into_any(),
                            })
                            .collect::<Vec<_>>()}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let (status, rows) = screen.with(|s| (s.list.status(), s.list.page_rows()));
                        if let Some(message) = status_message(&status) {
                            let class = if matches!(status, ListStatus::Error(_)) {
                                "cage-table__placeholder cage-table__placeholder--error"
                            } else {
                                "cage-table__placeholder"
                            };
                            return view! {
                                <tr>
                                    <td class=class colspan=column_count.clone()>{message}</td>
                                </tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .enumerate()
                            .map(|(index, cage)| {
                                let id = cage.id;
                                let striped = if index % 2 == 1 { "cage-table__row cage-table__row--odd" } else { "cage-table__row" };
                                view! {
                                    <tr class=striped>
                                        {row_cells(&cage).into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                                        <td class="cage-table__actions">
                                            <button
                                                class="btn btn--danger"
                                                title="Delete cage"
                                                on:click=move |_| on_delete.run(id)
                                            >
                                                "Delete"
                                            </button>
                                            <button
                                                class="btn"
                                                title="Edit cage"
                                                on:click=move |_| on_edit.run(id)
                                            >
                                                "Edit"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>

            <div class="cage-table__paginator">
                <button class="btn" title="Refresh" on:click=move |_| on_refresh.run(())>
                    "Refresh"
                </button>
                <select
                    class="cage-table__rows"
                    prop:value=move || screen.with(|s| s.list.pager.rows.to_string())
                    on:change=move |ev| {
                        if let Ok(rows) = event_target_value(&ev).parse::<usize>() {
                            screen.update(|s| s.list.set_rows_per_page(rows));
                        }
                    }
                >
                    {ROWS_PER_PAGE_OPTIONS
                        .iter()
                        .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button
                    class="btn"
                    disabled=move || screen.with(|s| !s.list.pager.has_prev())
                    on:click=move |_| screen.update(|s| s.list.first_page())
                >
                    "«"
                </button>
                <button
                    class="btn"
                    disabled=move || screen.with(|s| !s.list.pager.has_prev())
                    on:click=move |_| screen.update(|s| s.list.prev_page())
                >
                    "‹"
                </button>
                <span class="cage-table__report">{move || screen.with(|s| s.list.page_report())}</span>
                <button
                    class="btn"
                    disabled=move || screen.with(|s| !s.list.pager.has_next(s.list.visible_count()))
                    on:click=move |_| screen.update(|s| s.list.next_page())
                >
                    "›"
                </button>
                <button
                    class="btn"
                    disabled=move || screen.with(|s| !s.list.pager.has_next(s.list.visible_count()))
                    on:click=move |_| screen.update(|s| s.list.last_page())
                >
                    "»"
                </button>
                <button class="btn" on:click=move |_| on_add.run(())>
                    "+ Add"
                </button>
            </div>
        </div>
    }
}

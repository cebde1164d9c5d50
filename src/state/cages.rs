//! Cage collection, area lookup, filtering and paging for the table.
//!
//! DESIGN
//! ======
//! The collection mirrors the remote store as of the last successful fetch or
//! confirmed mutation. Filters and paging are views over it and never modify
//! it. Cage and area results are applied independently so a failed area fetch
//! still shows cages with their denormalized area names.
//!
//! Every fetch start and every confirmed mutation bumps a generation counter.
//! A fetch result is only applied if nothing happened after it started, so a
//! slow response can never bring back rows a later mutation removed.

#[cfg(test)]
#[path = "cages_test.rs"]
mod cages_test;

use super::filter::{CageColumn, FilterState};
use super::pager::Pager;
use crate::net::error::ApiError;
use crate::net::types::{Area, Cage};

/// What the table body should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Error(String),
    Empty,
    NoMatches,
    Ready,
}

/// Cage list state for the management table.
#[derive(Clone, Debug, Default)]
pub struct CagesState {
    pub items: Vec<Cage>,
    pub areas: Vec<Area>,
    pub loading: bool,
    /// Last cage fetch failure; cleared by the next successful fetch.
    pub error: Option<String>,
    pub areas_error: Option<String>,
    pub filters: FilterState,
    pub pager: Pager,
    generation: u64,
    latest_fetch: u64,
}

impl CagesState {
    /// Apply the result of a cage list fetch.
    ///
    /// On the initial load a failure leaves the list empty. On later refreshes
    /// a failure keeps the current rows, which already reflect every
    /// confirmed mutation.
    pub fn apply_cages(&mut self, result: Result<Vec<Cage>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.clamp_page();
            }
            Err(e) => {
                leptos::logging::warn!("cage list fetch failed: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Start a cage list fetch and return its ticket.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.latest_fetch = self.generation;
        self.loading = true;
        self.generation
    }

    /// Apply the result of the fetch started with `ticket`.
    ///
    /// Returns `false`, leaving the rows untouched, when another fetch or a
    /// confirmed mutation happened after the ticket was issued.
    pub fn apply_fetched(&mut self, ticket: u64, result: Result<Vec<Cage>, ApiError>) -> bool {
        if ticket == self.latest_fetch {
            self.loading = false;
        }
        if ticket != self.generation {
            leptos::logging::warn!("dropping stale cage list: ticket={ticket} current={}", self.generation);
            return false;
        }
        self.apply_cages(result);
        true
    }

    /// Record a confirmed mutation; fetches started before it are stale.
    pub fn mark_mutated(&mut self) {
        self.generation += 1;
    }

    /// Apply the result of an area list fetch.
    pub fn apply_areas(&mut self, result: Result<Vec<Area>, ApiError>) {
        match result {
            Ok(areas) => {
                self.areas = areas;
                self.areas_error = None;
            }
            Err(e) => {
                leptos::logging::warn!("area list fetch failed: {e}");
                self.areas_error = Some(e.to_string());
            }
        }
    }

    /// Replace the global search text and return to the first page.
    pub fn apply_global_filter(&mut self, text: &str) {
        self.filters.set_global(text);
        self.pager.first();
    }

    /// Set one column's constraint and return to the first page.
    pub fn set_column_filter(&mut self, column: CageColumn, text: &str) {
        self.filters.set_column(column, text);
        self.pager.first();
    }

    /// Restore the default filters and the first page.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.pager.first();
    }

    /// Search text to show in the search box.
    pub fn global_filter_text(&self) -> String {
        self.filters.global.clone().unwrap_or_default()
    }

    /// Text to show in a column's filter box.
    pub fn column_filter_text(&self, column: CageColumn) -> String {
        self.filters.column_value(column).unwrap_or_default().to_owned()
    }

    /// Rows passing the active filters, in collection order.
    pub fn visible(&self) -> Vec<&Cage> {
        self.items.iter().filter(|c| self.filters.matches(c)).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|c| self.filters.matches(c)).count()
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<Cage> {
        let visible = self.visible();
        let range = self.pager.range(visible.len());
        visible[range].iter().map(|c| (*c).clone()).collect()
    }

    pub fn page_report(&self) -> String {
        self.pager.report(self.visible_count())
    }

    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.pager.set_rows(rows);
    }

    pub fn next_page(&mut self) {
        let total = self.visible_count();
        self.pager.next(total);
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    pub fn first_page(&mut self) {
        self.pager.first();
    }

    pub fn last_page(&mut self) {
        let total = self.visible_count();
        self.pager.last(total);
    }

    pub fn status(&self) -> ListStatus {
        if self.loading && self.items.is_empty() {
            return ListStatus::Loading;
        }
        if self.items.is_empty() {
            return match &self.error {
                Some(message) => ListStatus::Error(message.clone()),
                None => ListStatus::Empty,
            };
        }
        if self.visible_count() == 0 {
            return ListStatus::NoMatches;
        }
        ListStatus::Ready
    }

    pub fn cage(&self, cage_id: i64) -> Option<&Cage> {
        self.items.iter().find(|c| c.id == cage_id)
    }

    pub fn area(&self, area_id: i64) -> Option<&Area> {
        self.areas.iter().find(|a| a.area_id == area_id)
    }

    pub fn area_name(&self, area_id: i64) -> Option<String> {
        self.area(area_id).map(|a| a.area_name.clone())
    }

    /// Replace the row with the same id after a confirmed update.
    /// Returns `false` if the row is no longer present.
    pub fn replace_cage(&mut self, cage: Cage) -> bool {
        self.mark_mutated();
        match self.items.iter_mut().find(|c| c.id == cage.id) {
            Some(slot) => {
                *slot = cage;
                true
            }
            None => false,
        }
    }

    /// Remove a row after a confirmed delete.
    pub fn remove_cage(&mut self, cage_id: i64) -> bool {
        self.mark_mutated();
        let before = self.items.len();
        self.items.retain(|c| c.id != cage_id);
        let removed = self.items.len() != before;
        if removed {
            self.clamp_page();
        }
        removed
    }

    fn clamp_page(&mut self) {
        let total = self.visible_count();
        self.pager.clamp(total);
    }
}

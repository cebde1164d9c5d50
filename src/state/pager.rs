//! Client-side paging over the filtered cage rows.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use std::ops::Range;

pub const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Zero-based page cursor and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub rows: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 0, rows: DEFAULT_ROWS_PER_PAGE }
    }
}

impl Pager {
    /// Number of pages for `total` rows; an empty table still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows.max(1)).max(1)
    }

    pub fn first(&mut self) {
        self.page = 0;
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        self.page = (self.page + 1).min(self.page_count(total) - 1);
    }

    pub fn last(&mut self, total: usize) {
        self.page = self.page_count(total) - 1;
    }

    /// Change the page size; unsupported sizes are ignored. Returns to the first page.
    pub fn set_rows(&mut self, rows: usize) {
        if ROWS_PER_PAGE_OPTIONS.contains(&rows) {
            self.rows = rows;
            self.page = 0;
        }
    }

    /// Pull the cursor back inside the table after rows disappeared.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(self.page_count(total) - 1);
    }

    /// Index range of the current page within `total` rows.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.rows).min(total);
        let end = (start + self.rows).min(total);
        start..end
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    /// Page report, e.g. `"6 to 10 of 12"`.
    pub fn report(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            return format!("0 to 0 of {total}");
        }
        format!("{} to {} of {total}", range.start + 1, range.end)
    }
}

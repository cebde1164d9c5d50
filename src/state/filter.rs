//! Display filters for the cage table.
//!
//! Filters only select which rows are shown; the underlying collection is
//! never modified.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::Cage;

/// A table column whose text can be filtered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CageColumn {
    Name,
    Area,
    Description,
    MaxQuantity,
}

impl CageColumn {
    /// Data columns in table order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Area, Self::Description, Self::MaxQuantity];

    pub fn header(self) -> &'static str {
        match self {
            Self::Name => "Cage Name",
            Self::Area => "Area",
            Self::Description => "Description",
            Self::MaxQuantity => "Max Quantity",
        }
    }

    /// Display text of this column for `cage`.
    pub fn cell(self, cage: &Cage) -> String {
        match self {
            Self::Name => cage.name.clone(),
            Self::Area => cage.area_name.clone().unwrap_or_default(),
            Self::Description => cage.description.clone(),
            Self::MaxQuantity => cage.max_quantity.to_string(),
        }
    }
}

/// How a column constraint compares its value to a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    #[default]
    Contains,
    StartsWith,
    Equals,
}

impl MatchMode {
    /// Case-insensitive comparison of `cell` against `needle`.
    pub fn matches(self, cell: &str, needle: &str) -> bool {
        let cell = cell.to_lowercase();
        let needle = needle.to_lowercase();
        match self {
            Self::Contains => cell.contains(&needle),
            Self::StartsWith => cell.starts_with(&needle),
            Self::Equals => cell == needle,
        }
    }
}

/// A per-column constraint; inactive while `value` is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnConstraint {
    pub column: CageColumn,
    pub mode: MatchMode,
    pub value: Option<String>,
}

/// Global predicate plus per-column constraints, combined with AND.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub global: Option<String>,
    pub columns: Vec<ColumnConstraint>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            global: None,
            columns: vec![ColumnConstraint { column: CageColumn::Name, mode: MatchMode::StartsWith, value: None }],
        }
    }
}

impl FilterState {
    /// Replace the global predicate. Blank text clears it.
    pub fn set_global(&mut self, text: &str) {
        self.global = non_blank(text);
    }

    /// Set the value of the constraint on `column`, adding a `Contains`
    /// constraint if the column has none yet. Blank text deactivates it.
    pub fn set_column(&mut self, column: CageColumn, text: &str) {
        let value = non_blank(text);
        if let Some(constraint) = self.columns.iter_mut().find(|c| c.column == column) {
            constraint.value = value;
        } else {
            self.columns.push(ColumnConstraint { column, mode: MatchMode::Contains, value });
        }
    }

    /// Current value of the constraint on `column`.
    pub fn column_value(&self, column: CageColumn) -> Option<&str> {
        self.columns.iter().find(|c| c.column == column).and_then(|c| c.value.as_deref())
    }

    /// Whether any predicate is active.
    pub fn is_active(&self) -> bool {
        self.global.is_some() || self.columns.iter().any(|c| c.value.is_some())
    }

    pub fn matches(&self, cage: &Cage) -> bool {
        if let Some(needle) = &self.global {
            let hit = CageColumn::ALL
                .iter()
                .any(|col| MatchMode::Contains.matches(&col.cell(cage), needle));
            if !hit {
                return false;
            }
        }
        self.columns.iter().all(|c| match &c.value {
            Some(value) => c.mode.matches(&c.column.cell(cage), value),
            None => true,
        })
    }
}

fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text.to_owned()) }
}

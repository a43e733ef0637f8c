use std::collections::{BTreeMap, BTreeSet};

use crate::state::data_model::{self, Row};

/// Filter held for one column: a substring pattern for free-text columns,
/// a set of accepted values for enumerated ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnFilter {
    Text(String),
    Values(BTreeSet<String>),
}

impl ColumnFilter {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(pattern) => pattern.is_empty(),
            Self::Values(values) => values.is_empty(),
        }
    }

    /// Text patterns match case-insensitively anywhere in the cell; value
    /// sets require an exact match.
    pub fn matches(&self, cell: &str) -> bool {
        match self {
            Self::Text(pattern) => {
                pattern.is_empty() || cell.to_lowercase().contains(&pattern.to_lowercase())
            }
            Self::Values(values) => values.is_empty() || values.contains(cell),
        }
    }
}

/// Active filters keyed by column. Empty filters are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    filters: BTreeMap<String, ColumnFilter>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, column: &str) -> bool {
        self.filters.contains_key(column)
    }

    pub fn text(&self, column: &str) -> &str {
        match self.filters.get(column) {
            Some(ColumnFilter::Text(pattern)) => pattern,
            _ => "",
        }
    }

    pub fn selected_values(&self, column: &str) -> Option<&BTreeSet<String>> {
        match self.filters.get(column) {
            Some(ColumnFilter::Values(values)) => Some(values),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Replaces the filter for `column`; an empty filter removes the entry.
    /// Returns whether anything changed.
    pub fn set(&mut self, column: &str, filter: ColumnFilter) -> bool {
        if filter.is_empty() {
            return self.remove(column);
        }
        if self.filters.get(column) == Some(&filter) {
            return false;
        }
        self.filters.insert(column.to_string(), filter);
        true
    }

    pub fn remove(&mut self, column: &str) -> bool {
        self.filters.remove(column).is_some()
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// AND across every header column that has a filter. Filters on columns
    /// outside `headers` are ignored.
    pub fn row_matches(&self, row: &Row, headers: &[String]) -> bool {
        headers.iter().all(|header| {
            self.filters
                .get(header)
                .map(|filter| filter.matches(&data_model::cell_text(row, header)))
                .unwrap_or(true)
        })
    }
}

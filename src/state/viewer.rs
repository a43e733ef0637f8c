use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::io::xlsx_io;
use crate::state::columns::EnumeratedColumns;
use crate::state::data_model::{self, Dataset, Row};
use crate::state::filter::{ColumnFilter, FilterState};
use crate::state::sort::{self, SortSpec};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Identifies one load. Only the most recently issued ticket may apply its
/// result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Dataset, filters and sort of one viewer. Every derived view is computed
/// from these on demand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerState {
    dataset: Dataset,
    enumerated: EnumeratedColumns,
    filters: FilterState,
    sort_spec: Option<SortSpec>,
    status: LoadStatus,
    error: Option<LoadError>,
    last_ticket: u64,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(enumerated: EnumeratedColumns) -> Self {
        Self {
            enumerated,
            ..Self::default()
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn headers(&self) -> &[String] {
        self.dataset.headers()
    }

    pub fn rows(&self) -> &[Row] {
        self.dataset.rows()
    }

    pub fn row_count(&self) -> usize {
        self.dataset.len()
    }

    pub fn enumerated_columns(&self) -> &EnumeratedColumns {
        &self.enumerated
    }

    /// Swaps the enumerated-column configuration. Filters are dropped since
    /// their kind depends on it.
    pub fn set_enumerated_columns(&mut self, enumerated: EnumeratedColumns) {
        self.enumerated = enumerated;
        self.filters.clear();
    }

    pub fn is_enumerated(&self, column: &str) -> bool {
        self.enumerated.is_enumerated(column)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort_spec.as_ref()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.last_ticket += 1;
        self.status = LoadStatus::Loading;
        self.error = None;
        LoadTicket(self.last_ticket)
    }

    /// Applies the outcome of the load identified by `ticket`. Returns
    /// `false` when a newer load has been started since, in which case
    /// nothing changes.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: Result<Dataset, LoadError>) -> bool {
        if ticket.0 != self.last_ticket {
            warn!(
                ticket = ticket.0,
                latest = self.last_ticket,
                "discarding result of superseded load"
            );
            return false;
        }

        let outcome = outcome.and_then(|dataset| {
            if dataset.is_empty() {
                Err(LoadError::EmptyData)
            } else {
                Ok(dataset)
            }
        });

        match outcome {
            Ok(dataset) => {
                info!(
                    rows = dataset.len(),
                    columns = dataset.headers().len(),
                    "workbook loaded"
                );
                self.replace_dataset(dataset);
            }
            Err(err) => {
                warn!(error = %err, "workbook load failed");
                self.status = LoadStatus::Failed;
                self.error = Some(err);
            }
        }
        true
    }

    /// Decodes `bytes` and applies the result in one step.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        let ticket = self.begin_load();
        let outcome = xlsx_io::decode_workbook(bytes);
        let result = outcome.as_ref().map(|_| ()).map_err(Clone::clone);
        self.finish_load(ticket, outcome);
        result
    }

    /// Sets a text pattern. On an enumerated column the pattern is taken as a
    /// single selected value.
    pub fn set_text_filter(&mut self, column: &str, pattern: &str) -> bool {
        let filter = if self.is_enumerated(column) {
            let mut values = BTreeSet::new();
            if !pattern.is_empty() {
                values.insert(pattern.to_string());
            }
            ColumnFilter::Values(values)
        } else {
            ColumnFilter::Text(pattern.to_string())
        };
        debug!(column, pattern, "set filter");
        self.filters.set(column, filter)
    }

    /// Replaces the selected set of an enumerated column. Ignored for
    /// free-text columns.
    pub fn set_selected_values(&mut self, column: &str, values: BTreeSet<String>) -> bool {
        if !self.is_enumerated(column) {
            debug!(column, "ignoring value selection on free-text column");
            return false;
        }
        debug!(column, selected = values.len(), "set selected values");
        self.filters.set(column, ColumnFilter::Values(values))
    }

    pub fn toggle_enumerated_value(&mut self, column: &str, value: &str) -> bool {
        if !self.is_enumerated(column) {
            return false;
        }
        let mut values = self
            .filters
            .selected_values(column)
            .cloned()
            .unwrap_or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        debug!(column, value, selected = values.len(), "toggled value");
        self.filters.set(column, ColumnFilter::Values(values))
    }

    pub fn clear_filter(&mut self, column: &str) -> bool {
        self.filters.remove(column)
    }

    pub fn clear_all_filters(&mut self) {
        self.filters.clear();
    }

    /// Same column flips the direction, a new column starts ascending.
    pub fn sort_by(&mut self, column: &str) {
        let next = match self.sort_spec.as_ref() {
            Some(spec) if spec.column == column => SortSpec {
                column: spec.column.clone(),
                order: spec.order.toggled(),
            },
            _ => SortSpec::ascending(column),
        };
        debug!(column, order = ?next.order, "sort");
        self.sort_spec = Some(next);
    }

    /// Positions of the rows passing every filter, in display order.
    pub fn visible_row_indices(&self) -> Vec<usize> {
        let headers = self.dataset.headers();
        let rows = self.dataset.rows();
        let mut indices: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| self.filters.row_matches(row, headers).then_some(idx))
            .collect();
        if let Some(spec) = self.sort_spec.as_ref() {
            sort::sort_indices(rows, &mut indices, spec);
        }
        indices
    }

    pub fn visible_rows(&self) -> Vec<&Row> {
        let rows = self.dataset.rows();
        self.visible_row_indices()
            .into_iter()
            .filter_map(|idx| rows.get(idx))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        let headers = self.dataset.headers();
        self.dataset
            .rows()
            .iter()
            .filter(|row| self.filters.row_matches(row, headers))
            .count()
    }

    /// Distinct non-empty values of `column` over the whole dataset, in
    /// first-seen order. Filters do not affect it.
    pub fn enumerated_value_options(&self, column: &str) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut options = Vec::new();
        for row in self.dataset.rows() {
            let text = data_model::cell_text(row, column);
            if !text.is_empty() && seen.insert(text.clone()) {
                options.push(text);
            }
        }
        options
    }

    fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.filters.clear();
        self.sort_spec = None;
        self.status = LoadStatus::Ready;
        self.error = None;
    }
}

use std::collections::BTreeMap;

use serde_json::{Number, Value};

pub type Row = BTreeMap<String, Value>;
pub type TableData = Vec<Row>;

/// Largest magnitude at which every integral f64 is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;
/// Integral floats below this print every digit instead of an exponent.
const MAX_PLAIN_INTEGER: f64 = 1e21;

/// Decoded rows plus the header order fixed at load time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: TableData,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: TableData) -> Self {
        Self { headers, rows }
    }

    /// Builds a dataset whose headers are the keys of the first row, kept in
    /// `column_order`.
    pub fn from_rows(column_order: &[String], rows: TableData) -> Self {
        let headers = match rows.first() {
            Some(first) => column_order
                .iter()
                .filter(|column| first.contains_key(column.as_str()))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &TableData {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats a cell value for display, filtering and text comparison.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => display_number(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Display text of `row[column]`; missing cells are empty.
pub fn cell_text(row: &Row, column: &str) -> String {
    row.get(column).map(display_value).unwrap_or_default()
}

/// Converts a spreadsheet float into a JSON number, collapsing integral
/// values to integers so `2.0` displays as `2`.
pub fn number_value(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        return Value::Number((value as i64).into());
    }
    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn display_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_PLAIN_INTEGER => {
            format!("{f:.0}")
        }
        _ => n.to_string(),
    }
}

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use serde_json::{Number, Value};

use crate::state::data_model::{self, Row};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "\u{2191}",
            Self::Desc => "\u{2193}",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            order: SortOrder::Asc,
        }
    }
}

/// Stable-sorts `indices` (positions into `rows`) by `spec`. Descending
/// flips the comparator so equal keys keep their relative order.
pub fn sort_indices(rows: &[Row], indices: &mut [usize], spec: &SortSpec) {
    let column = spec.column.as_str();
    indices.sort_by(|&a, &b| {
        let left = rows.get(a).and_then(|row| row.get(column));
        let right = rows.get(b).and_then(|row| row.get(column));
        let ordering = compare_cells(left, right);
        match spec.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Numbers compare numerically when both sides are numbers; everything else
/// compares by display text with [`natural_cmp`]. Missing cells are empty.
pub fn compare_cells(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    if let (Some(Value::Number(a)), Some(Value::Number(b))) = (left, right) {
        return compare_numbers(a, b);
    }

    let left = left.map(data_model::display_value).unwrap_or_default();
    let right = right.map(data_model::display_value).unwrap_or_default();
    natural_cmp(&left, &right)
}

/// Case-insensitive text ordering where runs of digits compare by value, so
/// `"2"` sorts before `"10"`. Ties fall back to lowercase-first, then to the
/// raw text, which keeps the order total.
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    compare_folded(left, right)
        .then_with(|| compare_case(left, right))
        .then_with(|| left.cmp(right))
}

fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    match (left.as_i64(), right.as_i64()) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => {
            let a = left.as_f64().unwrap_or(f64::NAN);
            let b = right.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
    }
}

fn compare_folded(left: &str, right: &str) -> Ordering {
    let mut a = left.chars().peekable();
    let mut b = right.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let left_run = take_digits(&mut a);
                let right_run = take_digits(&mut b);
                let ordering = compare_digit_runs(&left_run, &right_run);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(x), Some(y)) => {
                a.next();
                b.next();
                let ordering = x.to_lowercase().cmp(y.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(ch) = chars.next_if(char::is_ascii_digit) {
        run.push(ch);
    }
    run
}

fn compare_digit_runs(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

fn compare_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .zip(right.chars())
        .find(|(a, b)| a != b)
        .map(|(a, b)| a.is_uppercase().cmp(&b.is_uppercase()))
        .unwrap_or(Ordering::Equal)
}

mod common;

use std::collections::BTreeSet;

use serde_json::Value;

use common::{row, text};
use xlsheet::state::filter::{ColumnFilter, FilterState};

fn values(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_text_filter_is_case_insensitive_substring() {
    let filter = ColumnFilter::Text("cri".to_string());
    assert!(filter.matches("Critical issue"));
    assert!(filter.matches("CRITICAL"));
    assert!(filter.matches("hypocrisy"));
    assert!(!filter.matches("minor"));
}

#[test]
fn test_text_filter_pattern_is_not_trimmed() {
    let filter = ColumnFilter::Text(" open".to_string());
    assert!(filter.matches("re open"));
    assert!(!filter.matches("open"));
}

#[test]
fn test_value_filter_is_exact_and_case_sensitive() {
    let filter = ColumnFilter::Values(values(&["High"]));
    assert!(filter.matches("High"));
    assert!(!filter.matches("high"));
    assert!(!filter.matches("Higher"));
}

#[test]
fn test_empty_filters_are_not_stored() {
    let mut state = FilterState::new();
    assert!(state.set("name", ColumnFilter::Text("bo".to_string())));
    assert!(state.is_active("name"));

    assert!(state.set("name", ColumnFilter::Text(String::new())));
    assert!(state.is_empty());

    assert!(!state.set("level", ColumnFilter::Values(BTreeSet::new())));
    assert!(state.is_empty());
}

#[test]
fn test_is_active_tracks_stored_filters() {
    let mut state = FilterState::new();
    assert!(!state.is_active("name"));

    state.set("name", ColumnFilter::Text("bo".to_string()));
    assert!(state.is_active("name"));
    assert!(!state.is_active("level"));

    assert!(state.remove("name"));
    assert!(!state.is_active("name"));
    assert!(!state.remove("name"));
}

#[test]
fn test_setting_same_filter_reports_no_change() {
    let mut state = FilterState::new();
    assert!(state.set("name", ColumnFilter::Text("x".to_string())));
    assert!(!state.set("name", ColumnFilter::Text("x".to_string())));
}

#[test]
fn test_row_matches_is_and_across_columns() {
    let headers = vec!["name".to_string(), "level".to_string()];
    let mut state = FilterState::new();
    state.set("name", ColumnFilter::Text("al".to_string()));
    state.set("level", ColumnFilter::Values(values(&["High"])));

    let both = row(&[("name", text("Alice")), ("level", text("High"))]);
    let one = row(&[("name", text("Alice")), ("level", text("Low"))]);
    assert!(state.row_matches(&both, &headers));
    assert!(!state.row_matches(&one, &headers));
}

#[test]
fn test_row_matches_ignores_filters_on_unknown_columns() {
    let headers = vec!["name".to_string()];
    let mut state = FilterState::new();
    state.set("ghost", ColumnFilter::Text("nothing matches this".to_string()));

    let r = row(&[("name", text("Alice"))]);
    assert!(state.row_matches(&r, &headers));
}

#[test]
fn test_missing_cell_matches_only_empty_text() {
    let headers = vec!["note".to_string()];
    let mut state = FilterState::new();
    state.set("note", ColumnFilter::Text("a".to_string()));

    let r = row(&[("note", Value::Null)]);
    assert!(!state.row_matches(&r, &headers));
}

#[test]
fn test_numbers_filter_by_display_text() {
    let headers = vec!["score".to_string()];
    let mut state = FilterState::new();
    state.set("score", ColumnFilter::Text("10".to_string()));

    assert!(state.row_matches(&row(&[("score", Value::Number(210.into()))]), &headers));
    assert!(!state.row_matches(&row(&[("score", Value::Number(2.into()))]), &headers));
}

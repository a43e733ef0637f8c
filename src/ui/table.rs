use dioxus::prelude::*;

use crate::state::data_model::{self, Row};
use crate::state::i18n::{self, Language};
use crate::state::sort::{SortOrder, SortSpec};
use crate::state::viewer::ViewerState;
use crate::ui::filter_panel::sanitize_id;

#[component]
pub fn Table(viewer: Signal<ViewerState>, language: Signal<Language>) -> Element {
    let snapshot = viewer.read().clone();
    let current_language = *language.read();

    if snapshot.row_count() == 0 {
        let empty_label = i18n::tr(current_language, "table.empty");
        return rsx! {
            p { class: "empty-message", id: "empty-message", "{empty_label}" }
        };
    }

    let visible_rows = snapshot.visible_row_indices();
    if visible_rows.is_empty() {
        let no_matches_label = i18n::tr(current_language, "table.no_matches");
        return rsx! {
            p { class: "empty-message", id: "no-matches", "{no_matches_label}" }
        };
    }

    let headers = snapshot.headers().to_vec();
    let sort_spec = snapshot.sort_spec().cloned();

    rsx! {
        div { class: "table-container", id: "table-container",
            table {
                thead {
                    tr {
                        for col in &headers {
                            th {
                                class: header_class(col, &sort_spec),
                                id: format!("col-{}", sanitize_id(col)),
                                onclick: {
                                    let col_name = col.clone();
                                    let mut viewer = viewer;
                                    move |_| {
                                        viewer.with_mut(|state| state.sort_by(&col_name));
                                    }
                                },
                                "{col}"
                                if let Some(indicator) = sort_indicator(col, &sort_spec) {
                                    span { class: "sort-indicator", "{indicator}" }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for (display_index, data_index) in visible_rows.iter().copied().enumerate() {
                        if let Some(row) = snapshot.rows().get(data_index) {
                            TableRow {
                                key: "{data_index}",
                                display_index,
                                data_index,
                                row: row.clone(),
                                columns: headers.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TableRow(display_index: usize, data_index: usize, row: Row, columns: Vec<String>) -> Element {
    let row_class = if display_index % 2 == 0 { "even" } else { "odd" };

    rsx! {
        tr { class: "{row_class}", id: format!("row-{data_index}"),
            for col in &columns {
                td {
                    class: "cell",
                    id: format!("cell-{}-{}", data_index, sanitize_id(col)),
                    "{data_model::cell_text(&row, col)}"
                }
            }
        }
    }
}

fn header_class(col: &str, sort_spec: &Option<SortSpec>) -> String {
    match sort_spec.as_ref() {
        Some(spec) if spec.column == col => match spec.order {
            SortOrder::Asc => "sortable sorted-asc".to_string(),
            SortOrder::Desc => "sortable sorted-desc".to_string(),
        },
        _ => "sortable".to_string(),
    }
}

fn sort_indicator(col: &str, sort_spec: &Option<SortSpec>) -> Option<&'static str> {
    sort_spec
        .as_ref()
        .filter(|spec| spec.column == col)
        .map(|spec| spec.order.indicator())
}

use dioxus::prelude::*;

use crate::state::columns::ControlStyle;
use crate::state::i18n::{self, Language};
use crate::state::viewer::ViewerState;

#[component]
pub fn FilterPanel(viewer: Signal<ViewerState>, language: Signal<Language>) -> Element {
    let snapshot = viewer.read().clone();
    let current_language = *language.read();

    if snapshot.row_count() == 0 {
        return rsx! {};
    }

    let headers = snapshot.headers().to_vec();
    let clear_label = i18n::tr(current_language, "filter.clear");

    rsx! {
        div { class: "filter-panel", id: "filter-panel",
            for header in headers {
                div { class: "filter-field", key: "{header}",
                    div { class: "filter-heading",
                        label { class: "filter-label", "{header}" }
                        if snapshot.filters().is_active(&header) {
                            button {
                                class: "filter-clear",
                                id: format!("filter-clear-{}", sanitize_id(&header)),
                                onclick: {
                                    let column = header.clone();
                                    let mut viewer = viewer;
                                    move |_| {
                                        viewer.with_mut(|state| {
                                            state.clear_filter(&column);
                                        });
                                    }
                                },
                                "{clear_label}"
                            }
                        }
                    }
                    {filter_control(&snapshot, viewer, current_language, &header)}
                }
            }
        }
    }
}

fn filter_control(
    snapshot: &ViewerState,
    viewer: Signal<ViewerState>,
    language: Language,
    column: &str,
) -> Element {
    let filters = snapshot.filters();
    let selected: Vec<String> = filters
        .selected_values(column)
        .map(|values| values.iter().cloned().collect())
        .unwrap_or_default();

    match snapshot.enumerated_columns().control_style(column) {
        Some(ControlStyle::Checkboxes) => rsx! {
            CheckboxFilter {
                viewer,
                column: column.to_string(),
                options: snapshot.enumerated_value_options(column),
                selected,
            }
        },
        Some(ControlStyle::Select) => rsx! {
            SelectFilter {
                viewer,
                column: column.to_string(),
                options: snapshot.enumerated_value_options(column),
                selected: selected.into_iter().next().unwrap_or_default(),
                all_label: i18n::tr(language, "filter.all").to_string(),
            }
        },
        None => rsx! {
            TextFilter {
                viewer,
                column: column.to_string(),
                pattern: filters.text(column).to_string(),
                placeholder: i18n::tr_args(language, "filter.placeholder", &[("column", column)]),
            }
        },
    }
}

#[component]
fn CheckboxFilter(
    viewer: Signal<ViewerState>,
    column: String,
    options: Vec<String>,
    selected: Vec<String>,
) -> Element {
    rsx! {
        div { class: "filter-checkboxes", id: format!("filter-{}", sanitize_id(&column)),
            for choice in options {
                label { class: "filter-checkbox", key: "{choice}",
                    input {
                        r#type: "checkbox",
                        checked: selected.contains(&choice),
                        onchange: {
                            let column = column.clone();
                            let value = choice.clone();
                            let mut viewer = viewer;
                            move |_| {
                                viewer.with_mut(|state| {
                                    state.toggle_enumerated_value(&column, &value);
                                });
                            }
                        }
                    }
                    "{choice}"
                }
            }
        }
    }
}

#[component]
fn SelectFilter(
    viewer: Signal<ViewerState>,
    column: String,
    options: Vec<String>,
    selected: String,
    all_label: String,
) -> Element {
    rsx! {
        select {
            class: "filter-select",
            id: format!("filter-{}", sanitize_id(&column)),
            value: "{selected}",
            onchange: {
                let column = column.clone();
                let mut viewer = viewer;
                move |evt: Event<FormData>| {
                    let value = evt.value();
                    viewer.with_mut(|state| {
                        state.set_text_filter(&column, &value);
                    });
                }
            },
            option { value: "", "{all_label}" }
            for choice in options {
                option { key: "{choice}", value: "{choice}", "{choice}" }
            }
        }
    }
}

#[component]
fn TextFilter(
    viewer: Signal<ViewerState>,
    column: String,
    pattern: String,
    placeholder: String,
) -> Element {
    rsx! {
        input {
            class: "filter-input",
            id: format!("filter-{}", sanitize_id(&column)),
            r#type: "text",
            placeholder: "{placeholder}",
            value: "{pattern}",
            oninput: {
                let column = column.clone();
                let mut viewer = viewer;
                move |evt: Event<FormData>| {
                    let value = evt.value();
                    viewer.with_mut(|state| {
                        state.set_text_filter(&column, &value);
                    });
                }
            }
        }
    }
}

pub(crate) fn sanitize_id(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}

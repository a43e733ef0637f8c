use dioxus::prelude::*;

use crate::state::i18n::{self, Language};
use crate::state::viewer::ViewerState;
use crate::ui::actions;

#[component]
pub fn Toolbar(viewer: Signal<ViewerState>, language: Signal<Language>) -> Element {
    let snapshot = viewer.read().clone();
    let current_language = *language.read();
    let is_loading = snapshot.is_loading();
    let has_filters = snapshot.has_active_filters();
    let has_data = snapshot.row_count() > 0;

    let open_label = i18n::tr(current_language, "toolbar.open");
    let clear_filters_label = i18n::tr(current_language, "toolbar.clear_filters");
    let loading_label = i18n::tr(current_language, "toolbar.loading");
    let visible = snapshot.visible_count().to_string();
    let total = snapshot.row_count().to_string();
    let row_count_label = i18n::tr_args(
        current_language,
        "toolbar.row_count",
        &[("visible", &visible), ("total", &total)],
    );
    let error_label = snapshot
        .error()
        .map(|err| i18n::tr(current_language, err.message_key()));

    rsx! {
        div { class: "toolbar",
            // File group
            div { class: "toolbar-group",
                select {
                    class: "toolbar-select toolbar-select-sm",
                    id: "select-language",
                    value: "{current_language.code()}",
                    onchange: move |evt| {
                        if let Some(next_language) = Language::from_code(&evt.value()) {
                            let mut language = language;
                            language.set(next_language);
                        }
                    },
                    for lang in Language::all().iter().copied() {
                        option { value: "{lang.code()}", "{i18n::tr(current_language, lang.label_key())}" }
                    }
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-open",
                    disabled: is_loading,
                    onclick: move |_| {
                        spawn(async move {
                            actions::open_file(viewer, language).await;
                        });
                    },
                    "\u{1F4C2} {open_label}"
                }
            }
            div { class: "toolbar-separator" }

            // Filter group
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-clear-filters",
                    disabled: !has_filters,
                    onclick: move |_| {
                        let mut viewer = viewer;
                        viewer.with_mut(|state| state.clear_all_filters());
                    },
                    "\u{2716} {clear_filters_label}"
                }
                if has_data {
                    span { class: "row-count", id: "row-count", "{row_count_label}" }
                }
            }
        }
        if is_loading {
            div { class: "status-banner status-loading", id: "loading-banner", "{loading_label}" }
        }
        if let Some(message) = error_label {
            div { class: "status-banner status-error", id: "error-message", "{message}" }
        }
    }
}

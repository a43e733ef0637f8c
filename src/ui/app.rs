use dioxus::prelude::*;

use crate::config::{self, ViewerConfig};
use crate::state::viewer::ViewerState;
use crate::ui::actions;
use crate::ui::filter_panel::FilterPanel;
use crate::ui::table::Table;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(ViewerConfig::from_env);
    let enumerated = config.enumerated_columns();
    let initial_language = config.language;
    let viewer = use_signal(move || ViewerState::with_columns(enumerated));
    let language = use_signal(move || initial_language);

    use_effect(move || {
        if let Some(path) = config::startup_workbook() {
            spawn(actions::load_path(viewer, path));
        }
    });

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            Toolbar { viewer, language }
            FilterPanel { viewer, language }
            Table { viewer, language }
        }
    }
}

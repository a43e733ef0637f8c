use dioxus::prelude::*;
use std::path::PathBuf;

use tracing::info;

use crate::io::xlsx_io;
use crate::state::i18n::{self, Language};
use crate::state::viewer::ViewerState;

pub async fn open_file(viewer: Signal<ViewerState>, language: Signal<Language>) {
    let task = rfd::AsyncFileDialog::new()
        .add_filter(
            i18n::tr(*language.read(), "dialog.workbook_filter"),
            &xlsx_io::WORKBOOK_EXTENSIONS[..],
        )
        .pick_file()
        .await;

    if let Some(handle) = task {
        load_path(viewer, handle.path().to_path_buf()).await;
    }
}

/// Reads and decodes `path`, then hands the outcome to the viewer. The read
/// is the only await point.
pub async fn load_path(mut viewer: Signal<ViewerState>, path: PathBuf) {
    let ticket = viewer.with_mut(|state| state.begin_load());
    info!(path = %path.display(), "opening workbook");

    let outcome = match xlsx_io::read_workbook_bytes(&path).await {
        Ok(bytes) => xlsx_io::decode_workbook(&bytes),
        Err(err) => Err(err),
    };

    viewer.with_mut(|state| {
        state.finish_load(ticket, outcome);
    });
}

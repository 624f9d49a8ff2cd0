// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let view = app.store.view();
    if view.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = csv::to_export_string(&view, export.include_headers, export.delim());
    logf!("Copy: rows={}, headers={}", view.len(), export.include_headers);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", view.len()));
}

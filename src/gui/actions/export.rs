// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        logf!("Export: Out path set → {}", app.out_path_text);
        app.out_path_dirty = false;
    }

    let status_msg = {
        let view = app.store.view();
        if view.is_empty() {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        } else {
            logf!("Export: Begin rows={}", view.len());
            match file::write_export(&app.state.options.export, &view) {
                Ok(path) => format!("Exported {} row(s) → {}", view.len(), path.display()),
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    app.status(status_msg);
}

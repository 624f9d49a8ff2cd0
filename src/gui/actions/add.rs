// src/gui/actions/add.rs
use eframe::egui;
use crate::{gui::{app::App, worker}, validate};

/// Validate the dialog text and submit what passes. The worker re-fetches
/// on success, so the table updates without any reload.
pub fn add(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    let urls = match validate::check_text(&app.add_dialog.text).into_submission() {
        Ok(v) => v,
        Err(e) => {
            logd!("Add: {}", e);
            app.status(e.to_string());
            return;
        }
    };

    logf!("Add: Begin count={}", urls.len());
    app.running = true;
    app.job = Some(worker::spawn_submit(ctx, &app.state.options.backend, urls, app.status.clone()));
}

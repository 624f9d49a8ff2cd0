// src/gui/actions/fetch.rs
use eframe::egui;
use crate::gui::{app::App, worker};

pub fn fetch(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Fetch: Clicked while a job is running");
        return;
    }
    logf!("Fetch: Begin backend={}", app.state.options.backend.base_url);

    app.running = true;
    app.job = Some(worker::spawn_fetch(ctx, &app.state.options.backend, app.status.clone()));
}

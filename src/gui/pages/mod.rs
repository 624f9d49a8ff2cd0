// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::state::View;
use super::app::App;

pub mod analytics;
pub mod profiles;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn view(&self) -> View;

    /// Whether the left filter panel is shown next to this page.
    fn shows_filters(&self) -> bool { true }

    /// Draw the page body into the central panel.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

/// Small headline number with a caption, used by both pages.
pub(super) fn stat_card(ui: &mut egui::Ui, caption: &str, value: impl ToString, note: Option<&str>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(140.0);
        ui.vertical(|ui| {
            ui.small(caption);
            ui.heading(value.to_string());
            if let Some(n) = note {
                ui.small(n);
            }
        });
    });
}

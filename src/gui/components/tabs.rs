// src/gui/components/tabs.rs
//
// Top tab strip plus the "filtered / total" counter on the right.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_view();
        for page in router::all_pages() {
            let selected = page.view() == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, page.view());
                app.state.gui.current_view = page.view();
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{} / {} profiles", app.store.filtered_len(), app.store.len()));
        });
    });
}

// src/gui/components/add_dialog.rs
//
// Bulk-add window: paste URLs one per line, see live valid/invalid counts,
// submit only what passes.

use eframe::egui;
use crate::{gui::{actions, app::App}, validate};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.add_dialog.open {
        return;
    }

    let mut open = true;
    let mut submit = false;

    egui::Window::new("Add profiles")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(460.0)
        .show(ctx, |ui| {
            ui.label("One profile URL per line, e.g. https://www.linkedin.com/in/jane-doe");
            ui.add(
                egui::TextEdit::multiline(&mut app.add_dialog.text)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            );

            let check = validate::check_text(&app.add_dialog.text);
            ui.horizontal(|ui| {
                ui.label(format!("{} valid", check.valid.len()));
                if !check.invalid.is_empty() {
                    let red = ui.visuals().error_fg_color;
                    ui.colored_label(red, format!("{} invalid", check.invalid.len()))
                        .on_hover_text(check.invalid.join("\n"));
                }
            });

            ui.horizontal(|ui| {
                let can_submit = !check.valid.is_empty() && !app.running;
                if ui.add_enabled(can_submit, egui::Button::new("Submit")).clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    app.add_dialog.open = false;
                }
            });
        });

    if !open {
        app.add_dialog.open = false;
    }
    if submit {
        actions::add(app, ctx);
    }
}

// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::{
    config::options::ExportFormat,
    file,
    gui::{actions, app::App, worker},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(2.0);

    // --- Format + Include headers + Output field ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            // Keep the shown extension in sync until the user types their own path.
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.separator();
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_output_folder(app);
        }
    });

    // --- Actions ---
    ui.horizontal(|ui| {
        if ui.add_enabled(!app.running, egui::Button::new("Refresh")).clicked() {
            actions::fetch(app, ui.ctx());
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        if ui.add_enabled(!app.running, egui::Button::new("Add profiles…")).clicked() {
            app.add_dialog.open = true;
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(worker::read_status(&app.status));
    });
    ui.add_space(2.0);
}

/// Open the export folder (or its nearest existing ancestor) in the system file manager.
fn open_output_folder(app: &App) {
    let path = app.state.options.export.out_path();
    let folder = file::nearest_existing_dir(path.parent().unwrap_or(&path));

    let absolute = match std::fs::canonicalize(&folder) {
        Ok(p) => p,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute.display());
    }
}

fn open_folder_in_explorer(path: &std::path::Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let cmd = "explorer";
    #[cfg(target_os = "macos")]
    let cmd = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let cmd = "xdg-open";

    std::process::Command::new(cmd)
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("Failed to spawn {cmd}: {e}"))
}

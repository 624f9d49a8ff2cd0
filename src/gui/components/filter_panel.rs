// src/gui/components/filter_panel.rs
//
// Left panel: search, multi-select lists, completeness flags.
// Every change goes through `store.update_criteria`, which is a no-op when
// nothing actually changed.

use eframe::egui;
use crate::{filter::FilterCriteria, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Filters");
        let active = app.store.criteria().active_count();
        if active > 0 {
            ui.label(egui::RichText::new(active.to_string()).strong())
                .on_hover_text("Active filters");
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(active > 0, egui::Button::new("Clear")).clicked() {
                logf!("UI: Filters cleared");
                app.store.reset_criteria();
            }
        });
    });

    ui.separator();

    // Search
    let mut search = app.store.criteria().search.clone();
    let resp = ui.add(
        egui::TextEdit::singleline(&mut search)
            .hint_text("Search URL, headline, location")
            .desired_width(f32::INFINITY),
    );
    if resp.changed() {
        app.store.update_criteria(|c| c.set_search(search));
    }

    ui.add_space(6.0);

    // Style scroll bars like the table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::vertical()
        .id_salt("filters_scroll")
        .show(ui, |ui| {
            // Options are cloned so the store can be mutated inside the loops.
            let opts = app.filter_options.clone();

            checklist(ui, app, "Locations", &opts.locations,
                |c| &c.locations, FilterCriteria::toggle_location);
            checklist(ui, app, "Companies", &opts.companies,
                |c| &c.companies, FilterCriteria::toggle_company);
            checklist(ui, app, "Skills", &opts.skills,
                |c| &c.skills, FilterCriteria::toggle_skill);

            ui.add_space(6.0);
            ui.label(egui::RichText::new("Profile completeness").strong());

            let mut flags = flags_of(app.store.criteria());
            let mut changed = false;
            changed |= ui.checkbox(&mut flags[0], "Has experience").changed();
            changed |= ui.checkbox(&mut flags[1], "Has education").changed();
            changed |= ui.checkbox(&mut flags[2], "Has awards").changed();
            changed |= ui.checkbox(&mut flags[3], "Has certifications").changed();
            if changed {
                logd!("UI: Flags → {:?}", flags);
                app.store.update_criteria(|c| {
                    c.has_experience = flags[0];
                    c.has_education = flags[1];
                    c.has_awards = flags[2];
                    c.has_certifications = flags[3];
                });
            }
        });
}

fn flags_of(c: &FilterCriteria) -> [bool; 4] {
    [c.has_experience, c.has_education, c.has_awards, c.has_certifications]
}

fn checklist(
    ui: &mut egui::Ui,
    app: &mut App,
    title: &str,
    options: &[String],
    selected: fn(&FilterCriteria) -> &Vec<String>,
    toggle: fn(&mut FilterCriteria, &str),
) {
    let n_sel = selected(app.store.criteria()).len();
    let header = if n_sel > 0 { format!("{title} ({n_sel})") } else { s!(title) };

    egui::CollapsingHeader::new(header)
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui| {
            if options.is_empty() {
                ui.weak("Nothing to choose from");
                return;
            }
            for value in options {
                let mut on = selected(app.store.criteria()).contains(value);
                if ui.checkbox(&mut on, value.as_str()).changed() {
                    logd!("UI: {} toggle {:?}", title, value);
                    app.store.update_criteria(|c| toggle(c, value));
                }
            }
        });
}

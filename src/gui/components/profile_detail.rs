// src/gui/components/profile_detail.rs
//
// Window for the row picked in the profile table. The selection is the
// record's URL, so it survives re-sorting and refetches; if a refetch drops
// the record the window just closes.

use eframe::egui::{self, RichText};

use crate::{
    detail::{DetailEntry, ProfileDetail},
    gui::app::App,
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(url) = app.selected.as_deref() else { return };
    let Some(p) = app.store.find(url) else {
        logd!("Detail: {} no longer loaded, closing", url);
        app.selected = None;
        return;
    };
    let d = ProfileDetail::from_profile(p);

    let mut open = true;
    egui::Window::new(RichText::new(&d.name).strong())
        .id(egui::Id::new("profile_detail"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .default_height(520.0)
        .show(ctx, |ui| {
            if let Some(h) = &d.headline {
                ui.label(h);
            }
            if let Some(l) = &d.location {
                ui.weak(l);
            }
            ui.hyperlink_to(&d.url, &d.url);
            if let Some(img) = &d.image {
                ui.hyperlink_to("Photo", img);
            }
            ui.separator();

            if d.sections.is_empty() {
                ui.weak("Nothing else on record.");
                return;
            }

            egui::ScrollArea::vertical().id_salt("detail_scroll").show(ui, |ui| {
                for section in &d.sections {
                    ui.heading(section.title);
                    for e in &section.entries {
                        entry(ui, e);
                    }
                    ui.add_space(8.0);
                }
            });
        });

    if !open {
        app.selected = None;
    }
}

fn entry(ui: &mut egui::Ui, e: &DetailEntry) {
    // Skills are a bare tag list with no heading of their own.
    if e.heading.is_empty() && e.subheading.is_none() && e.lines.is_empty() {
        tags(ui, &e.tags);
        return;
    }
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong(&e.heading);
        if let Some(sub) = &e.subheading {
            ui.label(sub);
        }
        for line in &e.lines {
            ui.small(line);
        }
        tags(ui, &e.tags);
    });
}

fn tags(ui: &mut egui::Ui, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    let bg = ui.visuals().faint_bg_color;
    ui.horizontal_wrapped(|ui| {
        for t in tags {
            ui.label(RichText::new(t).small().background_color(bg));
        }
    });
}

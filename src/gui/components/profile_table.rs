// src/gui/components/profile_table.rs
//
// Sort controls + the striped profile table. Renders `store.view()` as is;
// clicking a sortable header sorts by it (again to flip direction), clicking
// a row opens its detail window.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    core::presence::{items, text},
    gui::app::App,
    model::Profile,
    sort::{SortKey, SortSpec},
};

/// (header, sort key if sortable, initial width)
const COLUMNS: &[(&str, Option<SortKey>, f32)] = &[
    ("Name",      Some(SortKey::Name),     160.0),
    ("Headline",  Some(SortKey::Headline), 240.0),
    ("Location",  Some(SortKey::Location), 150.0),
    ("Role",      None,                    160.0),
    ("Company",   None,                    140.0),
    ("Education", None,                    180.0),
    ("Skills",    None,                    200.0),
];

const SKILLS_SHOWN: usize = 3;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let spec = app.store.sort_spec();
    let mut next = spec;

    ui.horizontal(|ui| {
        ui.label("Sort by:");
        egui::ComboBox::from_id_salt("sort_key")
            .selected_text(next.key.label())
            .show_ui(ui, |ui| {
                for k in SortKey::ALL {
                    ui.selectable_value(&mut next.key, k, k.label());
                }
            });
        if ui.button(next.direction.arrow()).on_hover_text("Toggle direction").clicked() {
            next.direction = next.direction.toggle();
        }
    });

    if app.store.filtered_len() == 0 {
        ui.add_space(12.0);
        ui.label(if app.store.is_empty() {
            "No profiles loaded. Press Refresh to fetch from the backend."
        } else {
            "No profiles match the current filters."
        });
        apply_sort(app, spec, next);
        return;
    }

    // Reserve space for scroll bars instead of overlaying content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let selected = app.selected.clone();
    let mut clicked: Option<String> = None;

    let view = app.store.view();
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);
    for (i, &(_, _, w)) in COLUMNS.iter().enumerate() {
        let col = if i + 1 == COLUMNS.len() { Column::remainder() } else { Column::initial(w) };
        table = table.column(col.clip(true).at_least(40.0));
    }

    table
        .header(24.0, |mut header| {
            for &(title, key, _) in COLUMNS {
                header.col(|ui| {
                    let Some(key) = key else {
                        ui.strong(title);
                        return;
                    };
                    let label = if key == spec.key {
                        format!("{title} {}", spec.direction.arrow())
                    } else {
                        s!(title)
                    };
                    let resp = ui.add(
                        egui::Label::new(RichText::new(label).strong())
                            .selectable(false)
                            .sense(egui::Sense::click()),
                    );
                    if resp.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                        next = if key == spec.key {
                            SortSpec::new(key, spec.direction.toggle())
                        } else {
                            SortSpec::new(key, spec.direction)
                        };
                    }
                });
            }
        })
        .body(|body| {
            body.rows(22.0, view.len(), |mut row| {
                let p = view[row.index()];
                row.set_selected(selected.as_deref() == Some(p.url.as_str()));
                for cell in row_cells(p) {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        let resp = ui.add(egui::Label::new(&cell).selectable(false));
                        if !cell.is_empty() {
                            resp.on_hover_text(&cell);
                        }
                    });
                }
                if row.response().clicked() {
                    clicked = Some(p.url.clone());
                }
            });
        });

    if let Some(url) = clicked {
        logd!("UI: Detail → {}", url);
        app.selected = Some(url);
    }
    apply_sort(app, spec, next);
}

fn apply_sort(app: &mut App, before: SortSpec, after: SortSpec) {
    if after != before {
        logf!("UI: Sort → {:?} {:?}", after.key, after.direction);
        app.state.gui.sort = after;
        app.store.set_sort(after);
    }
}

/// Display strings, in `COLUMNS` order.
fn row_cells(p: &Profile) -> [String; 7] {
    let role = p.current_role();
    let edu = p.first_education().map(|e| {
        match (text(&e.degree), text(&e.institution)) {
            (Some(d), Some(i)) => format!("{d}, {i}"),
            (Some(x), None) | (None, Some(x)) => s!(x),
            (None, None) => s!(),
        }
    });
    let skills = items(&p.skills);
    let mut skill_text = skills.iter().take(SKILLS_SHOWN).cloned().collect::<Vec<_>>().join(", ");
    if skills.len() > SKILLS_SHOWN {
        skill_text.push_str(&format!(" +{}", skills.len() - SKILLS_SHOWN));
    }

    [
        s!(p.display_name()),
        s!(p.headline().unwrap_or("")),
        s!(p.location().unwrap_or("")),
        s!(role.and_then(|e| text(&e.title)).unwrap_or("")),
        s!(role.and_then(|e| text(&e.company)).unwrap_or("")),
        edu.unwrap_or_default(),
        skill_text,
    ]
}

// src/gui/pages/analytics.rs
//
// Read-only charts over the filtered set. Everything comes from
// `app.analytics`, which the app rebuilds when the store revision moves.

use eframe::egui;

use crate::{
    analytics::FrequencyTable,
    config::state::View,
    gui::app::App,
};

use super::{Page, stat_card};

pub struct AnalyticsPage;
pub static PAGE: AnalyticsPage = AnalyticsPage;

const BAR_WIDTH: f32 = 220.0;

impl Page for AnalyticsPage {
    fn view(&self) -> View { View::Analytics }
    fn title(&self) -> &'static str { "Analytics" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let a = &app.analytics;

        if a.overview.total == 0 {
            ui.label("No profiles match the current filters.");
            return;
        }

        ui.horizontal_wrapped(|ui| {
            stat_card(ui, "Profiles", a.overview.total, None);
            stat_card(ui, "Avg. completeness", format!("{}%", a.completeness.average_percent()), None);
            stat_card(ui, "Top location", a.top_location_label(), None);
            stat_card(ui, "Top company", a.top_company_label(), None);
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("analytics_scroll")
            .show(ui, |ui| {
                ui.columns(3, |cols| {
                    frequency_block(&mut cols[0], "Top locations", &a.top_locations);
                    frequency_block(&mut cols[1], "Top companies", &a.top_companies);
                    frequency_block(&mut cols[2], "Top skills", &a.top_skills);
                });

                ui.add_space(12.0);

                ui.columns(2, |cols| {
                    let ui = &mut cols[0];
                    ui.heading("Education levels");
                    let total = a.education_levels.total();
                    for (level, n) in a.education_levels.iter() {
                        bar_row(ui, level.label(), n, total);
                    }

                    let ui = &mut cols[1];
                    ui.heading("Profile completeness");
                    for (cat, n) in a.completeness.iter() {
                        let pct = a.completeness.percent(cat);
                        ui.horizontal(|ui| {
                            ui.label(format!("{:<15}", cat.label()));
                            ui.add(
                                egui::ProgressBar::new(pct as f32 / 100.0)
                                    .desired_width(BAR_WIDTH)
                                    .text(format!("{pct:.1}% ({n})")),
                            );
                        });
                    }
                });
            });
    }
}

fn frequency_block(ui: &mut egui::Ui, title: &str, table: &FrequencyTable) {
    ui.heading(title);
    if table.is_empty() {
        ui.weak("No data");
        return;
    }
    // Bars are relative to the leader, like a leaderboard.
    let max = table.first().map(|(_, n)| *n).unwrap_or(1);
    for (value, n) in table {
        bar_row(ui, value, *n, max);
    }
}

fn bar_row(ui: &mut egui::Ui, label: &str, n: usize, of: usize) {
    let frac = if of == 0 { 0.0 } else { n as f32 / of as f32 };
    ui.horizontal(|ui| {
        ui.add(egui::Label::new(label).truncate()).on_hover_text(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::ProgressBar::new(frac).desired_width(BAR_WIDTH * 0.5).text(n.to_string()));
        });
    });
}

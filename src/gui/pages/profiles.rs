// src/gui/pages/profiles.rs
use eframe::egui;

use crate::{analytics::share_of_total, config::state::View, gui::{app::App, components::profile_table}};

use super::{Page, stat_card};

pub struct ProfilesPage;
pub static PAGE: ProfilesPage = ProfilesPage;

impl Page for ProfilesPage {
    fn view(&self) -> View { View::Profiles }
    fn title(&self) -> &'static str { "Profiles" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let o = app.analytics.overview;
        let total = app.store.len();

        ui.horizontal_wrapped(|ui| {
            let share = format!("{}% of total", share_of_total(o.total, total));
            stat_card(ui, "Profiles", o.total, Some(share.as_str()));
            stat_card(ui, "Locations", o.unique_locations, None);
            stat_card(ui, "Companies", o.unique_companies, None);
            stat_card(ui, "Universities", o.unique_universities, None);
        });

        ui.separator();
        profile_table::draw(ui, app);
    }
}

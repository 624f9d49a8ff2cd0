// src/gui/router.rs
use crate::config::state::View;
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::profiles::PAGE,
    &pages::analytics::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(view: View) -> &'static dyn Page {
    match view {
        View::Profiles  => &pages::profiles::PAGE,
        View::Analytics => &pages::analytics::PAGE,
    }
}

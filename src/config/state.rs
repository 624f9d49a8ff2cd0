// src/config/state.rs
use serde::{Deserialize, Serialize};

use super::options::AppOptions;
use crate::sort::SortSpec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Profiles,
    Analytics,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiState {
    /// Active tab
    pub current_view: View,

    /// Initial sort for the profiles table
    pub sort: SortSpec,

    pub window_w: u32,
    pub window_h: u32,

    /// Fetch from the backend as soon as the window opens
    pub fetch_on_start: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_view: View::Profiles,
            sort: SortSpec::default(),
            window_w: 1280,
            window_h: 800,
            fetch_on_start: true,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

// src/config/loader.rs
//
// Layering: built-in defaults < `profile_dash.toml` < `PROFILE_DASH_*` env.
// Env keys nest with a double underscore, e.g.
//   PROFILE_DASH_BACKEND__BASE_URL=http://10.0.0.5:8000
//   PROFILE_DASH_EXPORT__FORMAT=tsv
//   PROFILE_DASH_GUI__FETCH_ON_START=false

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use super::{
    consts::{CONFIG_FILE, ENV_PREFIX},
    options::AppOptions,
    state::{AppState, GuiState},
};
use crate::error::{DashError, Result};

/// Load from `./profile_dash.toml` (if present) and the environment.
pub fn load() -> Result<AppState> {
    load_from(Path::new(CONFIG_FILE))
}

/// Load from an explicit file. A missing file is not an error.
pub fn load_from(path: &Path) -> Result<AppState> {
    let figment = Figment::new()
        .merge(Serialized::defaults(AppOptions::default()))
        .merge(Serialized::default("gui", GuiState::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__").global());

    let options: AppOptions = figment.extract()?;
    let gui: GuiState = figment.extract_inner("gui")?;
    let state = AppState { options, gui };

    validate(&state)?;
    logd!("Config: backend={} export={}", state.options.backend.base_url,
        state.options.export.out_path().display());
    Ok(state)
}

pub fn validate(state: &AppState) -> Result<()> {
    let url = state.options.backend.base_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(DashError::Config(format!(
            "backend.base_url must start with http:// or https:// (got {url:?})"
        )));
    }
    if state.gui.window_w == 0 || state.gui.window_h == 0 {
        return Err(DashError::Config(s!("gui window size must be non-zero")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ExportFormat;
    use crate::sort::{SortDirection, SortKey};

    #[test]
    fn missing_file_gives_defaults() {
        figment::Jail::expect_with(|_jail| {
            let st = load_from(Path::new("does_not_exist.toml")).expect("defaults");
            assert_eq!(st.options, AppOptions::default());
            assert!(st.gui.fetch_on_start);
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "dash.toml",
                r#"
                [backend]
                base_url = "http://files:1234"

                [export]
                format = "tsv"
                include_headers = true

                [gui]
                fetch_on_start = false
                sort = { key = "location", direction = "desc" }
                "#,
            )?;
            jail.set_env("PROFILE_DASH_BACKEND__BASE_URL", "https://env:4321");

            let st = load_from(Path::new("dash.toml")).expect("load");
            assert_eq!(st.options.backend.base_url, "https://env:4321");
            assert_eq!(st.options.export.format, ExportFormat::Tsv);
            assert!(st.options.export.include_headers);
            assert!(!st.gui.fetch_on_start);
            assert_eq!(st.gui.sort.key, SortKey::Location);
            assert_eq!(st.gui.sort.direction, SortDirection::Desc);
            Ok(())
        });
    }

    #[test]
    fn rejects_non_http_backend() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "[backend]\nbase_url = \"ftp://nope\"\n")?;
            let err = load_from(Path::new("bad.toml")).unwrap_err();
            assert!(matches!(err, DashError::Config(_)));
            Ok(())
        });
    }
}

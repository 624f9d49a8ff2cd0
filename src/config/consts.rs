// src/config/consts.rs

// Backend
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const PROFILES_PATH: &str = "/profiles";
pub const UPDATE_URLS_PATH: &str = "/update-urls";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "profile_dash.toml";
pub const ENV_PREFIX: &str = "PROFILE_DASH_";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "profiles";

// Analytics caps
pub const TOP_LOCATIONS: usize = 10;
pub const TOP_COMPANIES: usize = 10;
pub const TOP_SKILLS: usize = 15;

// Filter panel
pub const FILTER_SKILL_OPTIONS: usize = 20;

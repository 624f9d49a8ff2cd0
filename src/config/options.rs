// src/config/options.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub backend: BackendOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendOptions {
    /// Scheme + host (+ port), no trailing slash needed.
    pub base_url: String,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self { base_url: s!(DEFAULT_BACKEND_URL) }
    }
}

impl BackendOptions {
    pub fn profiles_url(&self) -> String {
        join!(self.base_url.trim_end_matches('/'), PROFILES_PATH)
    }

    pub fn update_urls_url(&self) -> String {
        join!(self.base_url.trim_end_matches('/'), UPDATE_URLS_PATH)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Off by default: the dashboard's export has always been header-less.
    pub include_headers: bool,
    out_path: OutputPath,
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        path.push(join!(&self.out_path.file_stem, ".", self.format.ext()));
        path
    }

    /// Parse GUI/CLI text into dir + stem. A pasted extension is ignored; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_string_lossy().into_owned();
        }
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }

    /// True while the user has not moved the output away from `out/profiles.*`.
    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: String, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_follows_format() {
        let mut e = ExportOptions::default();
        assert_eq!(e.out_path(), PathBuf::from("out").join("profiles.csv"));
        e.format = ExportFormat::Tsv;
        assert_eq!(e.out_path(), PathBuf::from("out").join("profiles.tsv"));
        assert!(e.is_default_path());
    }

    #[test]
    fn set_path_drops_pasted_extension() {
        let mut e = ExportOptions::default();
        e.set_path("  exports/march.txt ");
        assert_eq!(e.out_path(), PathBuf::from("exports").join("march.csv"));
        assert!(!e.is_default_path());
    }

    #[test]
    fn endpoint_urls_tolerate_trailing_slash() {
        let b = BackendOptions { base_url: s!("http://host:9000/") };
        assert_eq!(b.profiles_url(), "http://host:9000/profiles");
        assert_eq!(b.update_urls_url(), "http://host:9000/update-urls");
    }
}

// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::options::ExportOptions,
    csv::write_profiles,
    error::{DashError, Result},
    model::Profile,
};

/// Write the export file described by `export` (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, profiles: &[&Profile]) -> Result<PathBuf> {
    let path = export.out_path();
    write_export_to(&path, profiles, export.include_headers, export.delim())?;
    Ok(path)
}

/// Same, to an explicit path. Parent directories are created; the file is truncated.
pub fn write_export_to(
    path: &Path,
    profiles: &[&Profile],
    include_headers: bool,
    sep: char,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?);
    write_profiles(&mut out, profiles, include_headers, sep)?;
    out.flush()?;
    logf!("Export: wrote {} row(s) → {}", profiles.len(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(DashError::Validation(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Nearest existing ancestor directory of `path` (".") if none.
pub fn nearest_existing_dir(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

// src/csv.rs
use std::io::{self, Write};

use crate::{core::presence::text, model::Profile};

pub const EXPORT_HEADERS: [&str; 4] = ["Name", "Location", "Title", "Degree"];

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W, S>(mut w: W, row: &[S], sep: char) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Profile rows ---------------- */

/// name, location, current title, first degree. Missing pieces are empty cells.
pub fn profile_row(p: &Profile) -> [&str; 4] {
    [
        p.name().unwrap_or(""),
        p.location().unwrap_or(""),
        p.current_role().and_then(|e| text(&e.title)).unwrap_or(""),
        p.first_education().and_then(|e| text(&e.degree)).unwrap_or(""),
    ]
}

/// Stream rows (and optionally the header line) to a writer.
pub fn write_profiles<W: Write>(
    mut w: W,
    profiles: &[&Profile],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &EXPORT_HEADERS, sep)?;
    }
    for p in profiles {
        write_row(&mut w, &profile_row(p), sep)?;
    }
    Ok(())
}

/// Whole export as one string (clipboard path).
pub fn to_export_string(profiles: &[&Profile], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_profiles(&mut buf, profiles, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

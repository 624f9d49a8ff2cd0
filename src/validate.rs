// src/validate.rs
//
// Bulk-add input: one profile URL per line. Lines are trimmed, blanks are
// skipped, anything not shaped like a public profile URL is set aside.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DashError, Result};

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(www\.)?linkedin\.com/in/[A-Za-z0-9_-]+/?$").expect("static pattern")
});

/// Pattern check on an already trimmed value.
pub fn is_valid_profile_url(url: &str) -> bool {
    PROFILE_URL.is_match(url)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlCheck {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl UrlCheck {
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    /// The URLs to send. Errors when nothing valid is left.
    pub fn into_submission(self) -> Result<Vec<String>> {
        if self.valid.is_empty() {
            return Err(DashError::Validation(if self.invalid.is_empty() {
                s!("no URLs entered")
            } else {
                format!("none of {} URL(s) look like a profile URL", self.invalid.len())
            }));
        }
        if !self.invalid.is_empty() {
            logf!("Validate: skipping {} invalid URL(s)", self.invalid.len());
        }
        Ok(self.valid)
    }
}

/// Split free text into lines and sort each into valid / invalid.
/// Order is kept; duplicates are not removed.
pub fn check_text(input: &str) -> UrlCheck {
    check_urls(input.lines())
}

pub fn check_urls<'a, I>(urls: I) -> UrlCheck
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = UrlCheck::default();
    for u in urls.into_iter().map(str::trim).filter(|u| !u.is_empty()) {
        if is_valid_profile_url(u) {
            out.valid.push(s!(u));
        } else {
            out.invalid.push(s!(u));
        }
    }
    out
}

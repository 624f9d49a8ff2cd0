// src/model.rs
//
// Profile records as the backend serves them (one JSON array, camelCase keys).
//
// Only `url` is required. Everything else may be missing, including fields
// inside sub-records: scraper output is patchy and one bad entry must not
// fail the whole array. Consumers read optional data through
// `core::presence`, never by poking at the Options directly.

use serde::{Deserialize, Serialize};

use crate::core::presence::{items, text};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique key of the record.
    #[serde(rename = "linkedinUrl", alias = "url")]
    pub url: String,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
    /// Most recent first, by convention of the scraper (not enforced).
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<Vec<String>>,
    pub projects: Option<Vec<Project>>,
    pub awards: Option<Vec<Award>>,
    pub publications: Option<Vec<Publication>>,
    pub patents: Option<Vec<Patent>>,
    pub certifications: Option<Vec<Certification>>,
    pub languages: Option<Vec<Language>>,
    pub volunteer_experience: Option<Vec<VolunteerExperience>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patent {
    pub title: Option<String>,
    pub patent_number: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: Option<String>,
    pub proficiency: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerExperience {
    pub role: Option<String>,
    pub organization: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

impl Profile {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }

    pub fn name(&self) -> Option<&str> { text(&self.name) }
    pub fn headline(&self) -> Option<&str> { text(&self.headline) }
    pub fn location(&self) -> Option<&str> { text(&self.location) }

    /// Name if known, otherwise the URL.
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(&self.url)
    }

    /// First experience entry.
    pub fn current_role(&self) -> Option<&Experience> {
        items(&self.experience).first()
    }

    /// First education entry.
    pub fn first_education(&self) -> Option<&Education> {
        items(&self.education).first()
    }

    /// Companies across all experience entries, blanks skipped.
    pub fn companies(&self) -> impl Iterator<Item = &str> {
        items(&self.experience).iter().filter_map(|e| text(&e.company))
    }

    /// Skills as listed, blanks skipped, duplicates kept.
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        items(&self.skills).iter().map(String::as_str).filter(|s| !s.is_empty())
    }
}

/// Parse the backend's profile array.
pub fn parse_profiles(json: &str) -> crate::error::Result<Vec<Profile>> {
    Ok(serde_json::from_str(json)?)
}

/// Same as [`parse_profiles`], straight off a stream. No size ceiling.
pub fn read_profiles<R: std::io::Read>(reader: R) -> crate::error::Result<Vec<Profile>> {
    Ok(serde_json::from_reader(std::io::BufReader::new(reader))?)
}

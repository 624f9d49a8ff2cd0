// src/detail.rs
//
// Everything one record carries, flattened into titled sections of display
// entries. Empty collections produce no section; blank fields produce no line.
// The GUI detail window and the CLI `--show` path both render this.

use crate::{
    core::presence::{items, text},
    model::Profile,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailEntry {
    pub heading: String,
    pub subheading: Option<String>,
    /// Dates, descriptions, ids; already filtered to present values.
    pub lines: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub entries: Vec<DetailEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDetail {
    pub name: String,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub url: String,
    pub image: Option<String>,
    pub sections: Vec<DetailSection>,
}

impl ProfileDetail {
    pub fn from_profile(p: &Profile) -> Self {
        let mut sections = Vec::new();

        push(&mut sections, "Experience", items(&p.experience).iter().map(|e| {
            entry(
                text(&e.title),
                text(&e.company),
                [text(&e.duration), text(&e.location), text(&e.description)],
            )
        }));

        push(&mut sections, "Education", items(&p.education).iter().map(|e| {
            entry(
                text(&e.degree),
                text(&e.institution),
                [text(&e.field), text(&e.duration), text(&e.description)],
            )
        }));

        let skills: Vec<String> = p.skill_names().map(String::from).collect();
        if !skills.is_empty() {
            sections.push(DetailSection {
                title: "Skills",
                entries: vec![DetailEntry { tags: skills, ..Default::default() }],
            });
        }

        push(&mut sections, "Projects", items(&p.projects).iter().map(|x| DetailEntry {
            tags: items(&x.technologies).iter().filter(|t| !t.is_empty()).cloned().collect(),
            ..entry(text(&x.title), None, [text(&x.duration), text(&x.description), text(&x.url)])
        }));

        push(&mut sections, "Awards", items(&p.awards).iter().map(|x| {
            entry(text(&x.title), text(&x.issuer), [text(&x.date), text(&x.description), None])
        }));

        push(&mut sections, "Certifications", items(&p.certifications).iter().map(|x| {
            let id = text(&x.credential_id).map(|id| format!("ID: {id}"));
            let expiry = text(&x.expiry_date).map(|d| format!("Expires {d}"));
            let mut e = entry(text(&x.name), text(&x.issuer), [text(&x.date), None, text(&x.url)]);
            e.lines.extend(expiry);
            e.lines.extend(id);
            e
        }));

        push(&mut sections, "Languages", items(&p.languages).iter().map(|x| {
            entry(text(&x.name), text(&x.proficiency), [None, None, None])
        }));

        push(&mut sections, "Publications", items(&p.publications).iter().map(|x| {
            entry(text(&x.title), text(&x.publisher), [text(&x.date), text(&x.description), text(&x.url)])
        }));

        push(&mut sections, "Patents", items(&p.patents).iter().map(|x| {
            let number = text(&x.patent_number).map(|n| format!("No. {n}"));
            entry(text(&x.title), number.as_deref(), [text(&x.date), text(&x.description), None])
        }));

        push(&mut sections, "Volunteering", items(&p.volunteer_experience).iter().map(|x| {
            entry(text(&x.role), text(&x.organization), [text(&x.duration), text(&x.description), None])
        }));

        Self {
            name: s!(p.display_name()),
            headline: p.headline().map(String::from),
            location: p.location().map(String::from),
            url: p.url.clone(),
            image: text(&p.profile_image).map(String::from),
            sections,
        }
    }

    pub fn section(&self, title: &str) -> Option<&DetailSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

fn entry(heading: Option<&str>, sub: Option<&str>, lines: [Option<&str>; 3]) -> DetailEntry {
    DetailEntry {
        heading: s!(heading.unwrap_or("Untitled")),
        subheading: sub.map(String::from),
        lines: lines.into_iter().flatten().map(String::from).collect(),
        tags: Vec::new(),
    }
}

/// Keep the section only if it has entries.
fn push(out: &mut Vec<DetailSection>, title: &'static str, entries: impl Iterator<Item = DetailEntry>) {
    let entries: Vec<DetailEntry> = entries.collect();
    if !entries.is_empty() {
        out.push(DetailSection { title, entries });
    }
}

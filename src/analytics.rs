// src/analytics.rs
//
// Derived statistics over a record set (normally the filtered set).
// Recomputed from scratch on every change; nothing here is cached or mutated.

use std::collections::{HashMap, HashSet};

use crate::{
    config::consts::{TOP_COMPANIES, TOP_LOCATIONS, TOP_SKILLS},
    core::{
        presence::{has_items, items, text},
        text::{first_segment, to_lower},
    },
    model::Profile,
};

/// (value, count), descending by count; equal counts keep first-seen order.
pub type FrequencyTable = Vec<(String, usize)>;

/// Count values, then order by count.
///
/// The sort is stable over a first-seen list, which is what breaks ties.
/// `cap = None` keeps every entry.
pub fn frequency<'a, I>(values: I, cap: Option<usize>) -> FrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slot: HashMap<&'a str, usize> = HashMap::new();
    let mut table: Vec<(&'a str, usize)> = Vec::new();

    for v in values {
        match slot.get(v) {
            Some(&i) => table[i].1 += 1,
            None => {
                slot.insert(v, table.len());
                table.push((v, 1));
            }
        }
    }

    table.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(n) = cap {
        table.truncate(n);
    }
    table.into_iter().map(|(v, n)| (s!(v), n)).collect()
}

/* ---------------- Education ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    PhdDoctorate,
    Masters,
    Bachelors,
    Other,
}

/// First matching rule wins.
const RULES: &[(&[&str], EducationLevel)] = &[
    (&["phd", "doctorate"], EducationLevel::PhdDoctorate),
    (&["master", "mba"], EducationLevel::Masters),
    (&["bachelor"], EducationLevel::Bachelors),
];

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::PhdDoctorate,
        EducationLevel::Masters,
        EducationLevel::Bachelors,
        EducationLevel::Other,
    ];

    /// Total: a missing or unrecognised degree is `Other`.
    pub fn classify(degree: Option<&str>) -> Self {
        let Some(d) = degree.filter(|d| !d.is_empty()) else {
            return EducationLevel::Other;
        };
        let d = to_lower(d);
        RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| d.contains(n)))
            .map(|&(_, level)| level)
            .unwrap_or(EducationLevel::Other)
    }

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::PhdDoctorate => "PhD/Doctorate",
            EducationLevel::Masters => "Masters",
            EducationLevel::Bachelors => "Bachelors",
            EducationLevel::Other => "Other",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One count per level, in `EducationLevel::ALL` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EducationCounts([usize; 4]);

impl EducationCounts {
    pub fn get(&self, level: EducationLevel) -> usize {
        self.0[level.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EducationLevel, usize)> + '_ {
        EducationLevel::ALL.into_iter().map(|l| (l, self.get(l)))
    }

    fn add(&mut self, level: EducationLevel) {
        self.0[level.index()] += 1;
    }
}

/* ---------------- Completeness ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletenessCategory {
    Experience,
    Education,
    Skills,
    Awards,
    Certifications,
    Projects,
}

impl CompletenessCategory {
    pub const ALL: [CompletenessCategory; 6] = [
        CompletenessCategory::Experience,
        CompletenessCategory::Education,
        CompletenessCategory::Skills,
        CompletenessCategory::Awards,
        CompletenessCategory::Certifications,
        CompletenessCategory::Projects,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompletenessCategory::Experience => "Experience",
            CompletenessCategory::Education => "Education",
            CompletenessCategory::Skills => "Skills",
            CompletenessCategory::Awards => "Awards",
            CompletenessCategory::Certifications => "Certifications",
            CompletenessCategory::Projects => "Projects",
        }
    }

    pub fn is_filled(&self, p: &Profile) -> bool {
        match self {
            CompletenessCategory::Experience => has_items(&p.experience),
            CompletenessCategory::Education => has_items(&p.education),
            CompletenessCategory::Skills => has_items(&p.skills),
            CompletenessCategory::Awards => has_items(&p.awards),
            CompletenessCategory::Certifications => has_items(&p.certifications),
            CompletenessCategory::Projects => has_items(&p.projects),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Completeness {
    pub records: usize,
    counts: [usize; 6],
}

impl Completeness {
    /// Records with this category present and non-empty.
    pub fn count(&self, cat: CompletenessCategory) -> usize {
        self.counts[cat.index()]
    }

    /// Share of records filled for one category, one decimal.
    pub fn percent(&self, cat: CompletenessCategory) -> f64 {
        share_of_total(self.count(cat), self.records)
    }

    /// round(filled slots / (records × 6) × 100); 0 for an empty set.
    pub fn average_percent(&self) -> u32 {
        rounded_percent(self.counts.iter().sum(), self.records * self.counts.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = (CompletenessCategory, usize)> + '_ {
        CompletenessCategory::ALL.into_iter().map(|c| (c, self.count(c)))
    }
}

fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// Percentage with one decimal, as shown under the overview counter.
pub fn share_of_total(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 1000.0).round() / 10.0
}

/* ---------------- Overview + bundle ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overview {
    pub total: usize,
    pub unique_locations: usize,
    pub unique_companies: usize,
    pub unique_universities: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Analytics {
    pub overview: Overview,
    pub top_locations: FrequencyTable,
    pub top_companies: FrequencyTable,
    pub top_skills: FrequencyTable,
    pub education_levels: EducationCounts,
    pub completeness: Completeness,
}

impl Analytics {
    pub fn compute(profiles: &[&Profile]) -> Self {
        Self::from_iter(profiles.iter().copied())
    }

    pub fn compute_owned(profiles: &[Profile]) -> Self {
        Self::from_iter(profiles.iter())
    }

    fn from_iter<'a, I>(profiles: I) -> Self
    where
        I: Iterator<Item = &'a Profile> + Clone,
    {
        let top_locations = frequency(profiles.clone().filter_map(Profile::location), Some(TOP_LOCATIONS));
        let top_companies = frequency(profiles.clone().flat_map(Profile::companies), Some(TOP_COMPANIES));
        let top_skills = frequency(profiles.clone().flat_map(Profile::skill_names), Some(TOP_SKILLS));

        let mut education_levels = EducationCounts::default();
        let mut completeness = Completeness::default();
        let mut locations = HashSet::new();
        let mut companies = HashSet::new();
        let mut universities = HashSet::new();

        for p in profiles {
            completeness.records += 1;
            for cat in CompletenessCategory::ALL {
                if cat.is_filled(p) {
                    completeness.counts[cat.index()] += 1;
                }
            }
            for e in items(&p.education) {
                education_levels.add(EducationLevel::classify(e.degree.as_deref()));
                if let Some(inst) = text(&e.institution) {
                    universities.insert(inst);
                }
            }
            if let Some(loc) = p.location() {
                locations.insert(loc);
            }
            companies.extend(p.companies());
        }

        let overview = Overview {
            total: completeness.records,
            unique_locations: locations.len(),
            unique_companies: companies.len(),
            unique_universities: universities.len(),
        };

        Self { overview, top_locations, top_companies, top_skills, education_levels, completeness }
    }

    /// Most common location, city part only. "N/A" when there is none.
    pub fn top_location_label(&self) -> &str {
        self.top_locations.first().map(|(l, _)| first_segment(l)).unwrap_or("N/A")
    }

    pub fn top_company_label(&self) -> &str {
        self.top_companies.first().map(|(c, _)| c.as_str()).unwrap_or("N/A")
    }
}

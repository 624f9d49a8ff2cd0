// src/filter.rs
//
// Multi-criterion filtering over the full record set.
//
// AND across categories, OR inside a multi-select category. Stages run in a
// fixed order and only ever drop indices, so the result is a subsequence of
// the input and depends on nothing but (profiles, criteria).

use crate::{
    config::consts::FILTER_SKILL_OPTIONS,
    core::{
        presence::{has_items, text},
        text::{contains_lower, to_lower},
    },
    model::Profile,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free text. Empty = no constraint. Matched as typed (no trimming).
    pub search: String,
    pub locations: Vec<String>,
    pub companies: Vec<String>,
    pub skills: Vec<String>,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_awards: bool,
    pub has_certifications: bool,
}

/// Add if missing, remove if present. Keeps insertion order.
fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(s!(value));
    }
}

impl FilterCriteria {
    pub fn set_search(&mut self, s: impl Into<String>) {
        self.search = s.into();
    }

    pub fn toggle_location(&mut self, v: &str) { toggle(&mut self.locations, v) }
    pub fn toggle_company(&mut self, v: &str) { toggle(&mut self.companies, v) }
    pub fn toggle_skill(&mut self, v: &str) { toggle(&mut self.skills, v) }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Badge count: search is 1, each selected value is 1, each set flag is 1.
    pub fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + self.locations.len()
            + self.companies.len()
            + self.skills.len()
            + [
                self.has_experience,
                self.has_education,
                self.has_awards,
                self.has_certifications,
            ]
            .into_iter()
            .filter(|&f| f)
            .count()
    }
}

/// Indices into `profiles` that pass every active criterion, in input order.
pub fn filter_indices(profiles: &[Profile], c: &FilterCriteria) -> Vec<usize> {
    let mut ix: Vec<usize> = (0..profiles.len()).collect();

    if !c.search.is_empty() {
        let needle = to_lower(&c.search);
        ix.retain(|&i| matches_search(&profiles[i], &needle));
    }

    if !c.locations.is_empty() {
        ix.retain(|&i| {
            text(&profiles[i].location).is_some_and(|loc| c.locations.iter().any(|l| l == loc))
        });
    }

    if !c.companies.is_empty() {
        ix.retain(|&i| profiles[i].companies().any(|co| c.companies.iter().any(|x| x == co)));
    }

    if !c.skills.is_empty() {
        ix.retain(|&i| profiles[i].skill_names().any(|sk| c.skills.iter().any(|x| x == sk)));
    }

    if c.has_experience { ix.retain(|&i| has_items(&profiles[i].experience)); }
    if c.has_education { ix.retain(|&i| has_items(&profiles[i].education)); }
    if c.has_awards { ix.retain(|&i| has_items(&profiles[i].awards)); }
    if c.has_certifications { ix.retain(|&i| has_items(&profiles[i].certifications)); }

    ix
}

/// Borrowing convenience over `filter_indices`.
pub fn apply<'a>(profiles: &'a [Profile], c: &FilterCriteria) -> Vec<&'a Profile> {
    filter_indices(profiles, c).into_iter().map(|i| &profiles[i]).collect()
}

fn matches_search(p: &Profile, needle_lower: &str) -> bool {
    contains_lower(&p.url, needle_lower)
        || p.headline().is_some_and(|h| contains_lower(h, needle_lower))
        || p.location().is_some_and(|l| contains_lower(l, needle_lower))
}

/// Choices offered by the filter panel, distinct and in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub companies: Vec<String>,
    /// Capped at `FILTER_SKILL_OPTIONS`.
    pub skills: Vec<String>,
}

impl FilterOptions {
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        let mut out = Self::default();
        for p in profiles {
            if let Some(loc) = p.location() {
                push_unique(&mut out.locations, loc);
            }
            for co in p.companies() {
                push_unique(&mut out.companies, co);
            }
            for sk in p.skill_names() {
                push_unique(&mut out.skills, sk);
            }
        }
        out.skills.truncate(FILTER_SKILL_OPTIONS);
        out
    }

    /// Append any selected value the list doesn't offer, so every active
    /// selection keeps a checkbox (e.g. after a fetch dropped its records).
    pub fn with_selected(mut self, c: &FilterCriteria) -> Self {
        for (list, picked) in [
            (&mut self.locations, &c.locations),
            (&mut self.companies, &c.companies),
            (&mut self.skills, &c.skills),
        ] {
            for v in picked {
                push_unique(list, v);
            }
        }
        self
    }
}

fn push_unique(list: &mut Vec<String>, v: &str) {
    if !list.iter().any(|x| x == v) {
        list.push(s!(v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut v = vec![s!("a")];
        toggle(&mut v, "b");
        assert_eq!(v, ["a", "b"]);
        toggle(&mut v, "a");
        assert_eq!(v, ["b"]);
    }

    #[test]
    fn active_count_matches_panel_badge() {
        let mut c = FilterCriteria::default();
        assert_eq!(c.active_count(), 0);
        c.set_search("rust");
        c.toggle_location("NYC");
        c.toggle_skill("Go");
        c.toggle_skill("Rust");
        c.has_awards = true;
        assert_eq!(c.active_count(), 5);
        c.reset();
        assert!(c.is_default());
    }
}

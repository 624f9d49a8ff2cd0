// src/sort.rs
use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{core::text::to_lower, model::Profile};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Location,
    Headline,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Location, SortKey::Headline];

    /// Field this key reads. Absent or empty reads as `None`.
    pub fn accessor(self) -> fn(&Profile) -> Option<&str> {
        match self {
            SortKey::Name => Profile::name,
            SortKey::Location => Profile::location,
            SortKey::Headline => Profile::headline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Location => "Location",
            SortKey::Headline => "Headline",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "location" => Ok(SortKey::Location),
            "headline" => Ok(SortKey::Headline),
            other => Err(format!("Unknown sort key: {other}")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// Order `indices` (into `profiles`) by `spec`.
///
/// Lowercased comparison. Records without a value go last in both
/// directions. Stable, so equal keys keep their input order.
pub fn sort_indices(profiles: &[Profile], indices: &[usize], spec: SortSpec) -> Vec<usize> {
    let get = spec.key.accessor();
    let mut keyed: Vec<(Option<String>, usize)> = indices
        .iter()
        .map(|&i| (get(&profiles[i]).map(to_lower), i))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare(a.as_deref(), b.as_deref(), spec.direction));
    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Sort the whole set and borrow the result.
pub fn sorted(profiles: &[Profile], spec: SortSpec) -> Vec<&Profile> {
    let all: Vec<usize> = (0..profiles.len()).collect();
    sort_indices(profiles, &all, spec).into_iter().map(|i| &profiles[i]).collect()
}

fn compare(a: Option<&str>, b: Option<&str>, dir: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match dir {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

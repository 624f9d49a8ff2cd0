// src/store.rs
//
// Single owner of the fetched records and of everything derived from them.
//
// Every mutation rebuilds `filtered` and `view` from the full set and the
// current criteria, bumps `revision`, then tells subscribers what happened.
// The GUI reads through here instead of reloading anything.

use std::fmt;

use crate::{
    analytics::Analytics,
    filter::{self, FilterCriteria, FilterOptions},
    model::Profile,
    sort::{self, SortSpec},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    /// New data arrived (fetch).
    Replaced { total: usize, filtered: usize },
    /// Criteria changed.
    Filtered { total: usize, filtered: usize },
    /// Order changed; membership did not.
    Sorted { spec: SortSpec },
}

type Listener = Box<dyn FnMut(&StoreEvent) + Send>;

#[derive(Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    criteria: FilterCriteria,
    sort: SortSpec,
    filtered: Vec<usize>,
    view: Vec<usize>,
    revision: u64,
    listeners: Vec<Listener>,
}

impl fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileStore")
            .field("profiles", &self.profiles.len())
            .field("filtered", &self.filtered.len())
            .field("criteria", &self.criteria)
            .field("sort", &self.sort)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        let mut s = Self { profiles, ..Self::default() };
        s.recompute();
        s
    }

    pub fn subscribe(&mut self, f: impl FnMut(&StoreEvent) + Send + 'static) {
        self.listeners.push(Box::new(f));
    }

    /* ---------- mutations ---------- */

    /// Swap in a freshly fetched set. Criteria and sort are kept.
    pub fn replace_all(&mut self, profiles: Vec<Profile>) {
        self.profiles = profiles;
        self.recompute();
        logf!("Store: replaced (total={}, filtered={})", self.len(), self.filtered_len());
        self.emit(StoreEvent::Replaced { total: self.len(), filtered: self.filtered_len() });
    }

    /// Edit criteria in place. Nothing happens (no event) if the edit was a no-op.
    pub fn update_criteria(&mut self, edit: impl FnOnce(&mut FilterCriteria)) {
        let before = self.criteria.clone();
        edit(&mut self.criteria);
        if self.criteria == before {
            return;
        }
        self.refilter();
    }

    pub fn reset_criteria(&mut self) {
        if self.criteria.is_default() {
            return;
        }
        self.criteria.reset();
        self.refilter();
    }

    pub fn set_sort(&mut self, spec: SortSpec) {
        if spec == self.sort {
            return;
        }
        self.sort = spec;
        self.view = sort::sort_indices(&self.profiles, &self.filtered, self.sort);
        self.revision += 1;
        logd!("Store: sort → {:?} {:?}", spec.key, spec.direction);
        self.emit(StoreEvent::Sorted { spec });
    }

    /* ---------- reads ---------- */

    pub fn profiles(&self) -> &[Profile] { &self.profiles }
    pub fn criteria(&self) -> &FilterCriteria { &self.criteria }
    pub fn sort_spec(&self) -> SortSpec { self.sort }
    pub fn revision(&self) -> u64 { self.revision }
    pub fn len(&self) -> usize { self.profiles.len() }
    pub fn is_empty(&self) -> bool { self.profiles.is_empty() }
    pub fn filtered_len(&self) -> usize { self.filtered.len() }

    /// Look a record up by its URL.
    pub fn find(&self, url: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.url == url)
    }

    /// Filtered records in fetch order.
    pub fn filtered(&self) -> Vec<&Profile> {
        self.filtered.iter().map(|&i| &self.profiles[i]).collect()
    }

    /// Filtered records in display order.
    pub fn view(&self) -> Vec<&Profile> {
        self.view.iter().map(|&i| &self.profiles[i]).collect()
    }

    pub fn view_indices(&self) -> &[usize] {
        &self.view
    }

    /// Statistics over the filtered set.
    pub fn analytics(&self) -> Analytics {
        Analytics::compute(&self.filtered())
    }

    /// Filter panel choices: the full set plus whatever is still selected.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_profiles(&self.profiles).with_selected(&self.criteria)
    }

    /* ---------- internals ---------- */

    fn refilter(&mut self) {
        self.recompute();
        logd!("Store: criteria → {} active, {} match", self.criteria.active_count(), self.filtered_len());
        self.emit(StoreEvent::Filtered { total: self.len(), filtered: self.filtered_len() });
    }

    fn recompute(&mut self) {
        self.filtered = filter::filter_indices(&self.profiles, &self.criteria);
        self.view = sort::sort_indices(&self.profiles, &self.filtered, self.sort);
        self.revision += 1;
    }

    fn emit(&mut self, ev: StoreEvent) {
        for l in &mut self.listeners {
            l(&ev);
        }
    }
}

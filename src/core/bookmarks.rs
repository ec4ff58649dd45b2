//! Saved listings, one independent set per listing kind.

use serde::Serialize;

use super::store::Store;
use super::ListingKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkState {
    theses: Vec<String>,
    internships: Vec<String>,
    ideas: Vec<String>,
}

impl BookmarkState {
    fn set(&self, kind: ListingKind) -> &Vec<String> {
        match kind {
            ListingKind::Thesis => &self.theses,
            ListingKind::Internship => &self.internships,
            ListingKind::Idea => &self.ideas,
        }
    }

    fn set_mut(&mut self, kind: ListingKind) -> &mut Vec<String> {
        match kind {
            ListingKind::Thesis => &mut self.theses,
            ListingKind::Internship => &mut self.internships,
            ListingKind::Idea => &mut self.ideas,
        }
    }

    /// Flips membership of `id`. Returns `true` if it is saved afterwards.
    pub fn toggle(&mut self, kind: ListingKind, id: &str) -> bool {
        let set = self.set_mut(kind);
        if let Some(pos) = set.iter().position(|saved| saved == id) {
            set.remove(pos);
            false
        } else {
            set.push(id.to_string());
            true
        }
    }

    pub fn is_saved(&self, kind: ListingKind, id: &str) -> bool {
        self.set(kind).iter().any(|saved| saved == id)
    }

    /// Saved identifiers in the order they were saved.
    pub fn saved_ids(&self, kind: ListingKind) -> &[String] {
        self.set(kind)
    }

    pub fn count(&self, kind: ListingKind) -> usize {
        self.set(kind).len()
    }
}

pub type BookmarkStore = Store<BookmarkState>;

impl Store<BookmarkState> {
    pub fn toggle(&mut self, kind: ListingKind, id: &str) -> bool {
        self.update(|s| s.toggle(kind, id))
    }

    pub fn is_saved(&self, kind: ListingKind, id: &str) -> bool {
        self.snapshot().is_saved(kind, id)
    }
}

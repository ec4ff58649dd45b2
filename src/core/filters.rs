//! The shared filter state: a free-text search string plus one selection set
//! per facet.

use serde::{Deserialize, Serialize};

use super::store::Store;
use super::Facet;

/// The selected values of one facet.
///
/// Values are unique. Insertion order is kept so chips render in the order
/// the user picked them, but it has no effect on matching or equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FacetSelection(Vec<String>);

impl From<Vec<String>> for FacetSelection {
    /// Keeps the first occurrence of each value.
    fn from(values: Vec<String>) -> Self {
        let mut selection = Self::default();
        for value in values {
            if !selection.contains(&value) {
                selection.0.push(value);
            }
        }
        selection
    }
}

impl From<FacetSelection> for Vec<String> {
    fn from(selection: FacetSelection) -> Self {
        selection.0
    }
}

impl PartialEq for FacetSelection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl Eq for FacetSelection {}

impl FacetSelection {
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    /// Adds `value` if absent, removes it otherwise. Returns `true` if the
    /// value is selected afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|v| v == value) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(value.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One active facet value, as rendered in the chip bar above a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterChip {
    pub facet: Facet,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search: String,
    pub field: FacetSelection,
    pub location: FacetSelection,
    pub duration: FacetSelection,
    pub compensation: FacetSelection,
    pub work_type: FacetSelection,
}

impl FilterState {
    pub fn selection(&self, facet: Facet) -> &FacetSelection {
        match facet {
            Facet::Field => &self.field,
            Facet::Location => &self.location,
            Facet::Duration => &self.duration,
            Facet::Compensation => &self.compensation,
            Facet::WorkType => &self.work_type,
        }
    }

    fn selection_mut(&mut self, facet: Facet) -> &mut FacetSelection {
        match facet {
            Facet::Field => &mut self.field,
            Facet::Location => &mut self.location,
            Facet::Duration => &mut self.duration,
            Facet::Compensation => &mut self.compensation,
            Facet::WorkType => &mut self.work_type,
        }
    }

    /// Replaces the search string verbatim.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Symmetric add/remove of `value` in `facet`.
    ///
    /// Values outside the facet's domain are stored anyway; they simply
    /// never match a listing.
    pub fn toggle_filter(&mut self, facet: Facet, value: &str) -> bool {
        if !facet.in_domain(value) {
            tracing::debug!(
                "Toggling {:?} value {:?} which is outside its known domain",
                facet,
                value
            );
        }
        self.selection_mut(facet).toggle(value)
    }

    pub fn clear_filter(&mut self, facet: Facet) {
        self.selection_mut(facet).clear();
    }

    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selection(facet).contains(value)
    }

    /// Number of selected facet values, plus one if a search is present.
    pub fn active_filter_count(&self) -> usize {
        let selected: usize = Facet::ALL.iter().map(|f| self.selection(*f).len()).sum();
        selected + usize::from(!self.search.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        Facet::ALL
            .iter()
            .flat_map(|facet| {
                self.selection(*facet).iter().map(|value| FilterChip {
                    facet: *facet,
                    label: facet.label(),
                    value: value.to_string(),
                })
            })
            .collect()
    }
}

/// The process-wide filter store shared by every mounted feed.
pub type FilterStore = Store<FilterState>;

impl Store<FilterState> {
    pub fn set_search(&mut self, text: &str) {
        self.update(|s| s.set_search(text));
    }

    pub fn toggle_filter(&mut self, facet: Facet, value: &str) -> bool {
        self.update(|s| s.toggle_filter(facet, value))
    }

    pub fn clear_filter(&mut self, facet: Facet) {
        self.update(|s| s.clear_filter(facet));
    }

    pub fn clear_filters(&mut self) {
        self.update(FilterState::clear_filters);
    }

    pub fn active_filter_count(&self) -> usize {
        self.snapshot().active_filter_count()
    }
}

//! The two-level country → city tree behind the location facet.
//!
//! Expand/collapse state and the tree's own search box live here and are
//! never written into `FilterState`; only city (or "Remote") selection is.

use serde::Serialize;

use super::filters::{FilterState, FilterStore};
use super::Facet;

pub const REMOTE: &str = "Remote";

const LOCATIONS: &[(&str, &[&str])] = &[
    (
        "Sweden",
        &[
            "Stockholm",
            "Gothenburg",
            "Lund",
            "Malmö",
            "Uppsala",
            "Linköping",
            "Västerås",
            "Södertälje",
        ],
    ),
    ("Norway", &["Oslo", "Bergen", "Trondheim"]),
    ("Denmark", &["Copenhagen", "Aarhus"]),
    ("Finland", &["Helsinki", "Espoo", "Tampere"]),
    (REMOTE, &[]),
];

/// Every value the location facet can legitimately hold.
pub fn all_location_values() -> Vec<&'static str> {
    LOCATIONS
        .iter()
        .flat_map(|(country, cities)| {
            if cities.is_empty() {
                vec![*country]
            } else {
                cities.to_vec()
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
struct CountryNode {
    name: String,
    /// Empty for flattened, select-only nodes such as "Remote".
    cities: Vec<String>,
    expanded: bool,
}

impl CountryNode {
    fn is_leaf(&self) -> bool {
        self.cities.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityView {
    pub name: String,
    pub is_selected: bool,
}

/// A serializable representation of one country row for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationNodeView {
    pub name: String,
    pub is_leaf: bool,
    /// Effective expansion: stored state, or forced open while searching.
    pub is_expanded: bool,
    /// Selected cities of this country; `None` when there are none.
    pub selected_count: Option<usize>,
    /// Only meaningful for leaf nodes.
    pub is_selected: bool,
    pub cities: Vec<CityView>,
}

#[derive(Debug, Clone)]
pub struct LocationTree {
    nodes: Vec<CountryNode>,
    query: String,
}

impl Default for LocationTree {
    fn default() -> Self {
        Self::from_entries(LOCATIONS.iter().map(|(country, cities)| {
            (
                country.to_string(),
                cities.iter().map(|c| c.to_string()).collect(),
            )
        }))
    }
}

impl LocationTree {
    /// Builds a tree from `(country, cities)` pairs. All nodes start collapsed.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        Self {
            nodes: entries
                .into_iter()
                .map(|(name, cities)| CountryNode {
                    name,
                    cities,
                    expanded: false,
                })
                .collect(),
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
    }

    /// Flips the stored expand state of a country. Returns the new state;
    /// leaf and unknown nodes stay collapsed.
    pub fn toggle_expanded(&mut self, country: &str) -> bool {
        match self
            .nodes
            .iter_mut()
            .find(|n| n.name == country && !n.is_leaf())
        {
            Some(node) => {
                node.expanded = !node.expanded;
                node.expanded
            }
            None => {
                tracing::debug!("Ignoring expand toggle for {:?}", country);
                false
            }
        }
    }

    pub fn is_expanded(&self, country: &str) -> bool {
        self.nodes
            .iter()
            .any(|n| n.name == country && n.expanded)
    }

    /// Toggles a city (or a leaf such as "Remote") in the location facet.
    pub fn select(&self, filters: &mut FilterStore, value: &str) -> bool {
        filters.toggle_filter(Facet::Location, value)
    }

    /// How many of the country's cities are selected, whether or not they are
    /// currently visible.
    pub fn selected_count(&self, country: &str, filters: &FilterState) -> usize {
        self.nodes
            .iter()
            .find(|n| n.name == country)
            .map(|n| {
                n.cities
                    .iter()
                    .filter(|c| filters.is_selected(Facet::Location, c))
                    .count()
            })
            .unwrap_or(0)
    }

    /// The tree as it should be displayed for the current query and selection.
    pub fn visible(&self, filters: &FilterState) -> Vec<LocationNodeView> {
        let query = self.query.to_lowercase();
        let searching = !query.is_empty();

        self.nodes
            .iter()
            .filter_map(|node| {
                let name_match = node.name.to_lowercase().contains(&query);
                let cities: Vec<&String> = if !searching || name_match {
                    node.cities.iter().collect()
                } else {
                    node.cities
                        .iter()
                        .filter(|c| c.to_lowercase().contains(&query))
                        .collect()
                };

                if searching && !name_match && cities.is_empty() {
                    return None;
                }

                let selected = self.selected_count(&node.name, filters);
                Some(LocationNodeView {
                    name: node.name.clone(),
                    is_leaf: node.is_leaf(),
                    is_expanded: !node.is_leaf() && (node.expanded || searching),
                    selected_count: (selected > 0).then_some(selected),
                    is_selected: node.is_leaf() && filters.is_selected(Facet::Location, &node.name),
                    cities: cities
                        .into_iter()
                        .map(|c| CityView {
                            name: c.clone(),
                            is_selected: filters.is_selected(Facet::Location, c),
                        })
                        .collect(),
                })
            })
            .collect()
    }
}

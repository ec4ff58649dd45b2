//! Provides logic for filtering and searching lists of `Listing`s.

use super::filters::FilterState;
use super::{Facet, Listing};
use rayon::prelude::*;

/// A utility struct for searching and filtering listing collections.
///
/// This struct is stateless and provides methods as associated functions.
pub struct SearchEngine;

impl SearchEngine {
    /// Returns the listings that satisfy the search term and every non-empty facet.
    ///
    /// `debounced_search` is the committed search term, not the live input.
    /// Surviving listings keep their catalog order.
    pub fn filter_listings(
        listings: &[Listing],
        filters: &FilterState,
        debounced_search: &str,
    ) -> Vec<Listing> {
        let query = debounced_search.to_lowercase();
        listings
            .par_iter()
            .filter(|listing| Self::matches_lowered(listing, filters, &query))
            .cloned()
            .collect()
    }

    /// Checks if a single `Listing` matches the search term and facet selections.
    pub fn matches(listing: &Listing, filters: &FilterState, search: &str) -> bool {
        Self::matches_lowered(listing, filters, &search.to_lowercase())
    }

    fn matches_lowered(listing: &Listing, filters: &FilterState, query: &str) -> bool {
        if !query.is_empty() && !Self::matches_search_query(listing, query) {
            return false;
        }

        Facet::ALL
            .iter()
            .all(|facet| Self::matches_facet(listing, filters, *facet))
    }

    /// Case-insensitive substring match against title, short description,
    /// organization and field. `query` must already be lower-cased.
    fn matches_search_query(listing: &Listing, query: &str) -> bool {
        [
            &listing.title,
            &listing.short_description,
            &listing.organization,
            &listing.field,
        ]
        .iter()
        .any(|text| text.to_lowercase().contains(query))
    }

    /// An empty selection imposes no constraint. Otherwise the listing's
    /// attribute must be one of the selected values.
    fn matches_facet(listing: &Listing, filters: &FilterState, facet: Facet) -> bool {
        let selection = filters.selection(facet);
        if selection.is_empty() {
            return true;
        }
        facet
            .value_of(listing)
            .is_some_and(|value| selection.contains(value))
    }

    /// Returns the bookmarked listings in catalog order.
    pub fn saved_listings(listings: &[Listing], saved_ids: &[String]) -> Vec<Listing> {
        listings
            .iter()
            .filter(|listing| saved_ids.contains(&listing.id))
            .cloned()
            .collect()
    }
}

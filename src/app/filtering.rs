//! This module is responsible for mutating the application state by applying filters.
//!
//! It takes the `AppState` and recomputes `visible_listings` for the active
//! feed from the catalog, the filter store and the committed search term.

use crate::app::state::AppState;
use crate::core::SearchEngine;

/// Applies all current filters to the active feed to generate the visible list.
pub fn apply_filters(state: &mut AppState) {
    let listings = state.catalog.listings(state.active_feed);

    state.visible_listings = if state.show_saved {
        SearchEngine::saved_listings(
            listings,
            state.bookmarks.snapshot().saved_ids(state.active_feed),
        )
    } else {
        SearchEngine::filter_listings(listings, state.filters.snapshot(), &state.committed_search)
    };
    state.recompute_count += 1;

    tracing::debug!(
        "Recomputed {} feed: {} of {} listings visible",
        state.active_feed,
        state.visible_listings.len(),
        listings.len()
    );
}

/// Commits a debounced search term and recomputes the feed once.
pub fn commit_search(state: &mut AppState, text: String) {
    tracing::debug!("Committing search {:?}", text);
    state.committed_search = text;
    apply_filters(state);
}

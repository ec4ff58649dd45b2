//! Responsible for transforming the `AppState` into a `UiState` view model.
//!
//! This module acts as a presentation layer, preparing data specifically for
//! consumption by the UI: feed cards with their bookmark flag, filter chips,
//! the location tree and the visible page of each admin table.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::state::AppState;
use crate::core::{
    Compensation, FilterChip, Listing, ListingKind, LocationNodeView, TablePage, WorkType,
};

/// A serializable representation of the application state for the UI.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub active_feed: ListingKind,
    pub show_saved: bool,
    /// The live search box text (not yet necessarily applied).
    pub search_input: String,
    /// The search term the feed below was filtered with.
    pub applied_search: String,
    pub active_filter_count: usize,
    pub chips: Vec<FilterChip>,
    pub listings: Vec<ListingCard>,
    pub visible_count: usize,
    pub total_count: usize,
    pub saved_count: usize,
    pub location_query: String,
    pub location_tree: Vec<LocationNodeView>,
    pub organizations_table: TablePage,
    pub listings_table: TablePage,
    pub status_message: String,
}

/// A serializable representation of a single listing card in a feed.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingCard {
    pub id: String,
    pub kind: ListingKind,
    pub title: String,
    pub short_description: String,
    pub organization: String,
    pub field: String,
    pub location: String,
    pub duration: String,
    pub tags: Vec<String>,
    pub compensation: Option<Compensation>,
    pub work_type: Option<WorkType>,
    pub posted_at: DateTime<Utc>,
    pub apply_url: String,
    pub is_saved: bool,
}

impl ListingCard {
    fn from_listing(listing: &Listing, is_saved: bool) -> Self {
        Self {
            id: listing.id.clone(),
            kind: listing.kind,
            title: listing.title.clone(),
            short_description: listing.short_description.clone(),
            organization: listing.organization.clone(),
            field: listing.field.clone(),
            location: listing.location.clone(),
            duration: listing.duration.clone(),
            tags: listing.tags.clone(),
            compensation: listing.compensation,
            work_type: listing.work_type,
            posted_at: listing.posted_at,
            apply_url: listing.apply_url.clone(),
            is_saved,
        }
    }
}

fn feed_noun(kind: ListingKind, count: usize) -> &'static str {
    match (kind, count == 1) {
        (ListingKind::Thesis, true) => "thesis",
        (ListingKind::Thesis, false) => "theses",
        (ListingKind::Internship, true) => "internship",
        (ListingKind::Internship, false) => "internships",
        (ListingKind::Idea, true) => "idea",
        (ListingKind::Idea, false) => "ideas",
    }
}

/// Creates the complete `UiState` from the current `AppState`.
pub fn generate_ui_state(state: &AppState) -> UiState {
    let filters = state.filters.snapshot();
    let bookmarks = state.bookmarks.snapshot();
    let kind = state.active_feed;
    let total_count = state.active_catalog().len();
    let visible_count = state.visible_listings.len();

    let listings = state
        .visible_listings
        .iter()
        .map(|l| ListingCard::from_listing(l, bookmarks.is_saved(kind, &l.id)))
        .collect();

    let status_message = if state.show_saved {
        format!("{} saved {}", visible_count, feed_noun(kind, visible_count))
    } else if visible_count == total_count {
        format!("Showing all {} {}", total_count, feed_noun(kind, total_count))
    } else {
        format!(
            "Showing {} of {} {}",
            visible_count,
            total_count,
            feed_noun(kind, total_count)
        )
    };

    UiState {
        active_feed: kind,
        show_saved: state.show_saved,
        search_input: filters.search.clone(),
        applied_search: state.committed_search.clone(),
        active_filter_count: filters.active_filter_count(),
        chips: filters.chips(),
        listings,
        visible_count,
        total_count,
        saved_count: bookmarks.count(kind),
        location_query: state.location_tree.query().to_string(),
        location_tree: state.location_tree.visible(filters),
        organizations_table: state.organizations_table.page_view(),
        listings_table: state.listings_table.page_view(),
        status_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filtering::{apply_filters, commit_search};
    use crate::core::Facet;

    #[test]
    fn test_ui_state_reflects_bookmarks_and_counts() {
        let mut state = AppState::default();
        state.bookmarks.toggle(ListingKind::Thesis, "t-002");
        commit_search(&mut state, "volvo".to_string());

        let ui = generate_ui_state(&state);
        assert_eq!(ui.visible_count, 1);
        assert_eq!(ui.total_count, 8);
        assert_eq!(ui.saved_count, 1);
        assert!(ui.listings[0].is_saved);
        assert_eq!(ui.status_message, "Showing 1 of 8 theses");
    }

    #[test]
    fn test_ui_state_separates_live_and_applied_search() {
        let mut state = AppState::default();
        state.filters.set_search("abb");
        let ui = generate_ui_state(&state);
        assert_eq!(ui.search_input, "abb");
        assert_eq!(ui.applied_search, "");
        assert_eq!(ui.active_filter_count, 1);
        assert_eq!(ui.status_message, "Showing all 8 theses");
    }

    #[test]
    fn test_ui_state_chips_and_location_counts() {
        let mut state = AppState::default();
        state.filters.toggle_filter(Facet::Location, "Lund");
        state.filters.toggle_filter(Facet::Location, "Oslo");
        apply_filters(&mut state);

        let ui = generate_ui_state(&state);
        assert_eq!(ui.chips.len(), 2);
        let sweden = ui.location_tree.iter().find(|n| n.name == "Sweden").unwrap();
        let norway = ui.location_tree.iter().find(|n| n.name == "Norway").unwrap();
        let denmark = ui.location_tree.iter().find(|n| n.name == "Denmark").unwrap();
        assert_eq!(sweden.selected_count, Some(1));
        assert_eq!(norway.selected_count, Some(1));
        assert_eq!(denmark.selected_count, None);
    }

    #[test]
    fn test_saved_view_status_message() {
        let mut state = AppState::default();
        state.active_feed = ListingKind::Idea;
        state.bookmarks.toggle(ListingKind::Idea, "i-003");
        state.show_saved = true;
        apply_filters(&mut state);
        assert_eq!(generate_ui_state(&state).status_message, "1 saved idea");
    }

    #[test]
    fn test_ui_state_serializes_camel_case() {
        let state = AppState::default();
        let json = serde_json::to_value(generate_ui_state(&state)).unwrap();
        assert_eq!(json["activeFeed"], "thesis");
        assert_eq!(json["listings"][0]["isSaved"], false);
        assert_eq!(json["organizationsTable"]["totalPages"], 2);
        assert_eq!(json["listingsTable"]["showPagination"], true);
    }
}

//! Defines the central, mutable state of the application.

use crate::config::AppConfig;
use crate::core::{
    BookmarkStore, Catalog, DataTable, Debouncer, FilterStore, Listing, ListingKind,
    LocationTree, Organization,
};
use std::sync::{Arc, Mutex};

use super::admin;

/// Holds the complete, mutable state of the application.
///
/// This struct is wrapped in an `Arc<Mutex<...>>` so that IPC handlers and the
/// debounced search task can reach the same instance. Filters and bookmarks
/// are observable stores; every feed view reads from them.
pub struct AppState {
    /// The application's configuration settings.
    pub config: AppConfig,
    /// The read-only listing and organization collections.
    pub catalog: Catalog,
    /// Search text and facet selections shared by every feed.
    pub filters: FilterStore,
    /// Saved listing identifiers per listing kind.
    pub bookmarks: BookmarkStore,
    /// The search term the feed was last filtered with (the debounced value).
    pub committed_search: String,
    /// The feed currently shown.
    pub active_feed: ListingKind,
    /// `true` while the feed shows only bookmarked listings.
    pub show_saved: bool,
    /// The listings of the active feed that survive the current filters.
    pub visible_listings: Vec<Listing>,
    /// How many times the feed has been recomputed.
    pub recompute_count: u64,
    /// Expand state and search box of the location filter.
    pub location_tree: LocationTree,
    /// Admin back-office table over organizations.
    pub organizations_table: DataTable<Organization>,
    /// Admin back-office table over every listing.
    pub listings_table: DataTable<Listing>,
    /// Owns the pending search commit. Kept behind its own lock so a commit
    /// can be scheduled after the state lock is released.
    pub search_debouncer: Arc<Mutex<Debouncer>>,
}

impl Default for AppState {
    /// Creates an `AppState` with default settings over the sample catalog.
    fn default() -> Self {
        Self::new(AppConfig::default(), Catalog::sample())
    }
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let organizations_table = admin::organizations_table(&catalog, &config);
        let listings_table = admin::listings_table(&catalog, &config);
        let search_debouncer = Arc::new(Mutex::new(Debouncer::new(config.search_debounce())));

        let mut state = Self {
            active_feed: config.default_feed,
            config,
            catalog,
            filters: FilterStore::default(),
            bookmarks: BookmarkStore::default(),
            committed_search: String::new(),
            show_saved: false,
            visible_listings: Vec::new(),
            recompute_count: 0,
            location_tree: LocationTree::default(),
            organizations_table,
            listings_table,
            search_debouncer,
        };
        super::filtering::apply_filters(&mut state);
        state
    }

    /// The full, unfiltered catalog slice of the active feed.
    pub fn active_catalog(&self) -> &[Listing] {
        self.catalog.listings(self.active_feed)
    }

    /// Resets every filter, including both the live and committed search,
    /// and drops any pending search commit.
    pub fn reset_filters(&mut self) {
        self.search_debouncer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .cancel();
        self.filters.clear_filters();
        self.committed_search.clear();
    }
}

//! Contains all the command handlers that are callable from the frontend via IPC.
//!
//! Each function in this module corresponds to a specific `IpcMessage::command`.
//! These handlers are responsible for interacting with the `AppState` and the `core`
//! logic, and for sending `UserEvent`s back to the UI.

use serde::Deserialize;
use std::sync::{Arc, Mutex};

use super::admin::AdminTable;
use super::filtering::apply_filters;
use super::helpers::with_state_and_notify;
use super::proxy::EventProxy;
use super::state::AppState;
use super::tasks;
use crate::core::{Facet, ListingKind};

#[derive(Deserialize, Debug)]
struct ToggleFilterPayload {
    facet: Facet,
    value: String,
}

#[derive(Deserialize, Debug)]
struct ToggleBookmarkPayload {
    id: String,
    /// Defaults to the active feed.
    #[serde(default)]
    kind: Option<ListingKind>,
}

#[derive(Deserialize, Debug)]
struct SortTablePayload {
    table: AdminTable,
    column: String,
}

#[derive(Deserialize, Debug)]
struct GoToPagePayload {
    table: AdminTable,
    page: usize,
}

/// Sends the initial UI state.
pub fn initialize<P: EventProxy>(proxy: P, state: Arc<Mutex<AppState>>) {
    with_state_and_notify(&state, &proxy, |s| {
        tracing::info!(
            "Initialized with {} theses, {} internships, {} ideas and {} organizations",
            s.catalog.theses.len(),
            s.catalog.internships.len(),
            s.catalog.ideas.len(),
            s.catalog.organizations.len()
        );
    });
}

/// Updates the live search text and schedules the debounced feed update.
///
/// The search box reflects every keystroke right away; the feed is only
/// recomputed once the input has been quiet for the configured delay.
pub fn set_search<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    let Ok(text) = serde_json::from_value::<String>(payload.clone()) else {
        tracing::warn!("Failed to deserialize search text from payload: {:?}", payload);
        return;
    };

    with_state_and_notify(&state, &proxy, |s| s.filters.set_search(&text));
    tasks::schedule_search_commit(text, proxy, state);
}

pub fn toggle_filter<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(p) = serde_json::from_value::<ToggleFilterPayload>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| {
            s.filters.toggle_filter(p.facet, &p.value);
            apply_filters(s);
        });
    } else {
        tracing::warn!("Failed to deserialize filter toggle from payload: {:?}", payload);
    }
}

pub fn clear_filter<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(facet) = serde_json::from_value::<Facet>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| {
            s.filters.clear_filter(facet);
            apply_filters(s);
        });
    } else {
        tracing::warn!("Failed to deserialize facet from payload: {:?}", payload);
    }
}

/// Resets search and every facet, dropping any pending search commit.
pub fn clear_filters<P: EventProxy>(proxy: P, state: Arc<Mutex<AppState>>) {
    with_state_and_notify(&state, &proxy, |s| {
        s.reset_filters();
        apply_filters(s);
    });
}

pub fn toggle_bookmark<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    let Ok(p) = serde_json::from_value::<ToggleBookmarkPayload>(payload.clone()) else {
        tracing::warn!("Failed to deserialize bookmark from payload: {:?}", payload);
        return;
    };

    with_state_and_notify(&state, &proxy, |s| {
        let kind = p.kind.unwrap_or(s.active_feed);
        if s.catalog.find(kind, &p.id).is_none() {
            tracing::debug!("Bookmarking {} {:?} which is not in the catalog", kind, p.id);
        }
        let saved = s.bookmarks.toggle(kind, &p.id);
        tracing::debug!("Bookmark {} {:?} is now saved={}", kind, p.id, saved);
        if s.show_saved && kind == s.active_feed {
            apply_filters(s);
        }
    });
}

/// Switches to another feed. Filters carry over; the saved-only view does not.
pub fn switch_feed<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(kind) = serde_json::from_value::<ListingKind>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| {
            s.active_feed = kind;
            s.show_saved = false;
            apply_filters(s);
        });
    } else {
        tracing::warn!("Failed to deserialize feed kind from payload: {:?}", payload);
    }
}

/// Shows only the bookmarked listings of the active feed, or leaves that view.
pub fn show_saved<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(show) = serde_json::from_value::<bool>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| {
            s.show_saved = show;
            apply_filters(s);
        });
    } else {
        tracing::warn!("Failed to deserialize saved-view flag from payload: {:?}", payload);
    }
}

pub fn toggle_location_expanded<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(country) = serde_json::from_value::<String>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| {
            s.location_tree.toggle_expanded(&country);
        });
    } else {
        tracing::warn!("Failed to deserialize country from payload: {:?}", payload);
    }
}

pub fn set_location_query<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(query) = serde_json::from_value::<String>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| s.location_tree.set_query(&query));
    } else {
        tracing::warn!("Failed to deserialize location query from payload: {:?}", payload);
    }
}

pub fn select_location<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(value) = serde_json::from_value::<String>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| {
            s.location_tree.select(&mut s.filters, &value);
            apply_filters(s);
        });
    } else {
        tracing::warn!("Failed to deserialize location from payload: {:?}", payload);
    }
}

pub fn sort_table<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(p) = serde_json::from_value::<SortTablePayload>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| {
            let sorted = match p.table {
                AdminTable::Organizations => s.organizations_table.toggle_sort(&p.column),
                AdminTable::Listings => s.listings_table.toggle_sort(&p.column),
            };
            if !sorted {
                tracing::debug!("Column {:?} of {:?} is not sortable", p.column, p.table);
            }
        });
    } else {
        tracing::warn!("Failed to deserialize table sort from payload: {:?}", payload);
    }
}

pub fn go_to_page<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(p) = serde_json::from_value::<GoToPagePayload>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| match p.table {
            AdminTable::Organizations => s.organizations_table.go_to_page(p.page),
            AdminTable::Listings => s.listings_table.go_to_page(p.page),
        });
    } else {
        tracing::warn!("Failed to deserialize page from payload: {:?}", payload);
    }
}

//! Deferred work that runs outside of a command handler.

use std::sync::{Arc, Mutex};

use super::filtering;
use super::helpers::{lock_state, with_state_and_notify};
use super::proxy::EventProxy;
use super::state::AppState;

/// Applies a settled search term to the feed and notifies the UI.
pub fn commit_search<P: EventProxy>(text: String, proxy: &P, state: &Arc<Mutex<AppState>>) {
    with_state_and_notify(state, proxy, |s| {
        if s.filters.snapshot().search != text {
            // A newer keystroke or a reset overtook this commit.
            tracing::debug!("Dropping stale search commit {:?}", text);
            return;
        }
        filtering::commit_search(s, text);
    });
}

/// Schedules a search commit on the state's debouncer.
///
/// Must be called without holding the state lock: outside a runtime the
/// commit runs synchronously.
pub fn schedule_search_commit<P: EventProxy>(
    text: String,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    let debouncer = lock_state(&state).search_debouncer.clone();
    let mut debouncer = debouncer
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    debouncer.push(text, move |text| commit_search(text, &proxy, &state));
}

use std::sync::Once;

use crate::core::Listing;

static LOGGING_INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
///
/// This function is wrapped in a `Once` block to ensure that the global
/// subscriber is set exactly one time, even when tests are run in parallel.
pub fn setup_test_logging() {
    LOGGING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok(); // Ignore the error if it's already set by another crate.
    });
}

/// Returns the ids of `listings` in order, for compact assertions.
pub fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

/// Builds the JSON line a frontend would send for `command`.
pub fn ipc_line(command: &str, payload: serde_json::Value) -> String {
    serde_json::json!({ "command": command, "payload": payload }).to_string()
}


//! The interactive layer: state, commands and the view model sent to the UI.

pub mod admin;
pub mod commands;
pub mod events;
pub mod filtering;
pub mod helpers;
pub mod proxy;
pub mod state;
pub mod tasks;
pub mod view_model;

use std::sync::{Arc, Mutex};

use events::{IpcMessage, UserEvent};
use proxy::EventProxy;
use state::AppState;

/// Parses one IPC message and dispatches it to its command handler.
pub fn handle_ipc_message<P: EventProxy>(message: String, proxy: P, state: Arc<Mutex<AppState>>) {
    let msg = match serde_json::from_str::<IpcMessage>(&message) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::warn!("Failed to parse IPC message {:?}: {}", message, e);
            proxy.send_event(UserEvent::ShowError(format!("Invalid message: {e}")));
            return;
        }
    };

    tracing::debug!("IPC command {:?}", msg.command);
    let payload = msg.payload;

    match msg.command.as_str() {
        "initialize" => commands::initialize(proxy, state),
        "setSearch" => commands::set_search(payload, proxy, state),
        "toggleFilter" => commands::toggle_filter(payload, proxy, state),
        "clearFilter" => commands::clear_filter(payload, proxy, state),
        "clearFilters" => commands::clear_filters(proxy, state),
        "toggleBookmark" => commands::toggle_bookmark(payload, proxy, state),
        "switchFeed" => commands::switch_feed(payload, proxy, state),
        "showSaved" => commands::show_saved(payload, proxy, state),
        "toggleLocationExpanded" => commands::toggle_location_expanded(payload, proxy, state),
        "setLocationQuery" => commands::set_location_query(payload, proxy, state),
        "selectLocation" => commands::select_location(payload, proxy, state),
        "sortTable" => commands::sort_table(payload, proxy, state),
        "goToPage" => commands::go_to_page(payload, proxy, state),
        unknown => tracing::warn!("Unknown IPC command: {}", unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::sync::mpsc;
    use tracing_test::traced_test;

    fn line(command: &str, payload: serde_json::Value) -> String {
        crate::utils::test_helpers::ipc_line(command, payload)
    }

    #[traced_test]
    #[test]
    fn test_unknown_command_is_logged_and_ignored() {
        let (tx, mut rx) = mpsc::unbounded_channel::<UserEvent>();
        let state = Arc::new(Mutex::new(AppState::default()));

        handle_ipc_message(line("exportPdf", json!(null)), tx, state);

        assert!(rx.try_recv().is_err());
        assert!(logs_contain("Unknown IPC command: exportPdf"));
    }

    #[traced_test]
    #[test]
    fn test_malformed_payload_is_logged() {
        let (tx, mut rx) = mpsc::unbounded_channel::<UserEvent>();
        let state = Arc::new(Mutex::new(AppState::default()));

        handle_ipc_message(line("sortTable", json!({ "table": "users" })), tx, state);

        assert!(rx.try_recv().is_err());
        assert!(logs_contain("Failed to deserialize table sort"));
    }

    #[test]
    fn test_dispatch_reaches_command() {
        let (tx, mut rx) = mpsc::unbounded_channel::<UserEvent>();
        let state = Arc::new(Mutex::new(AppState::default()));

        handle_ipc_message(line("switchFeed", json!("internship")), tx, state.clone());

        assert!(matches!(rx.try_recv(), Ok(UserEvent::StateUpdate(ui)) if ui.total_count == 5));
        assert_eq!(
            state.lock().unwrap().active_feed,
            crate::core::ListingKind::Internship
        );
    }
}

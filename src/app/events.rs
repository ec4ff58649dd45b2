//! Defines the event and message structures for communication between the backend and frontend.

use serde::{Deserialize, Serialize};

use super::view_model::UiState;

/// Events sent from the Rust backend to the frontend.
///
/// Each variant is written as one JSON object tagged with its event name.
#[derive(Debug, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum UserEvent {
    /// A complete state update to re-render the UI.
    StateUpdate(Box<UiState>),
    /// An error message to be displayed to the user.
    ShowError(String),
}

/// A message received from the frontend via the IPC channel.
#[derive(Deserialize, Debug)]
pub struct IpcMessage {
    /// The name of the command to execute.
    pub command: String,
    /// The payload associated with the command, as a JSON value.
    #[serde(default)]
    pub payload: serde_json::Value,
}

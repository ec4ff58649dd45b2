use anyhow::{Context, Result};
use std::sync::{Arc, Mutex, PoisonError};
use thesis_board::app::{self, events::UserEvent, state::AppState};
use thesis_board::config::AppConfig;
use thesis_board::core::Catalog;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Reads IPC messages as JSON lines on stdin and writes `UserEvent`s as JSON
/// lines on stdout. Logs go to stderr.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {:#}", e);
        AppConfig::default()
    });

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => {
            tracing::info!("No catalog configured, using the built-in sample catalog");
            Catalog::sample()
        }
    };

    let mut initial_state = AppState::new(config, catalog);
    initial_state.filters.subscribe(|filters| {
        tracing::debug!(
            "Filters changed: {} active, search {:?}",
            filters.active_filter_count(),
            filters.search
        );
    });
    let state = Arc::new(Mutex::new(initial_state));

    let (proxy, mut event_rx) = mpsc::unbounded_channel::<UserEvent>();
    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(event) = event_rx.recv().await {
            let mut line = match serde_json::to_string(&event) {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to serialize event: {}", e);
                    continue;
                }
            };
            line.push('\n');
            if let Err(e) = stdout.write_all(line.as_bytes()).await {
                tracing::error!("Failed to write event to stdout: {}", e);
                break;
            }
            stdout.flush().await.ok();
        }
    });

    app::commands::initialize(proxy.clone(), state.clone());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        app::handle_ipc_message(line, proxy.clone(), state.clone());
    }

    tracing::info!("Input closed, shutting down.");
    let debouncer = state
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .search_debouncer
        .clone();
    debouncer
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .cancel();

    // The writer ends once every sender, including those held by aborted
    // commit tasks, is gone.
    drop(proxy);
    drop(state);
    writer.await?;

    Ok(())
}

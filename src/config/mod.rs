pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::ListingKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Quiet period before a typed search is committed to the feed.
    pub search_debounce_ms: u64,
    pub admin_page_size: usize,
    /// Catalog document to load at startup; the built-in sample is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub default_feed: ListingKind,
    pub empty_table_message: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            admin_page_size: 10,
            catalog_path: None,
            default_feed: ListingKind::Thesis,
            empty_table_message: "No records found.".to_string(),
        }
    }
}

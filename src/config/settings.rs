use anyhow::Result;
use directories::ProjectDirs;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::AppConfig;

const APP_NAME: &str = "ThesisBoard";
const CONFIG_FILE: &str = "config.json";

/// Returns the platform-specific configuration directory for the application.
pub fn get_config_directory() -> Option<PathBuf> {
    ProjectDirs::from("com", "thesisboard", APP_NAME)
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Resolves the config directory, preferring an explicit override.
fn resolve_config_directory(config_dir: Option<&Path>) -> Result<PathBuf> {
    match config_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => get_config_directory()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory")),
    }
}

/// Returns the full path to the configuration file.
pub fn get_config_file_path(config_dir: Option<&Path>) -> Result<PathBuf> {
    Ok(resolve_config_directory(config_dir)?.join(CONFIG_FILE))
}

/// Loads the application configuration from the config file.
/// If the file doesn't exist, it creates a default one.
/// If the file cannot be parsed, missing fields are filled in from the
/// defaults, and if that also fails the defaults are used as a whole.
pub fn load_config(config_dir: Option<&Path>) -> Result<AppConfig> {
    let config_path = get_config_file_path(config_dir)?;

    if !config_path.exists() {
        tracing::info!(
            "Config file not found, creating default config at {:?}",
            config_path
        );
        let default_config = AppConfig::default();
        save_config(&default_config, config_dir)?;
        return Ok(default_config);
    }

    let config_content = fs::read_to_string(&config_path)?;

    match serde_json::from_str::<AppConfig>(&config_content) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", config_path);
            Ok(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse config file at {:?}: {}. Attempting to migrate legacy config.",
                config_path,
                e
            );
            migrate_legacy_config(&config_content).or_else(|e| {
                tracing::warn!("Config migration failed: {}. Using default config.", e);
                Ok(AppConfig::default())
            })
        }
    }
}

/// Fills in fields that older config files do not have yet.
fn migrate_legacy_config(config_content: &str) -> Result<AppConfig> {
    let mut value: Value = serde_json::from_str(config_content)?;
    let obj = value
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Config is not a JSON object"))?;

    let defaults = AppConfig::default();

    // Helper to insert a default value if the key is missing or its value is null.
    let ensure_field = |obj: &mut serde_json::Map<String, Value>, key: &str, default_val: Value| {
        if !obj.contains_key(key) || obj.get(key) == Some(&Value::Null) {
            obj.insert(key.to_string(), default_val);
        }
    };

    ensure_field(
        obj,
        "search_debounce_ms",
        serde_json::to_value(defaults.search_debounce_ms)?,
    );
    ensure_field(
        obj,
        "admin_page_size",
        serde_json::to_value(defaults.admin_page_size)?,
    );
    ensure_field(
        obj,
        "default_feed",
        serde_json::to_value(defaults.default_feed)?,
    );
    ensure_field(
        obj,
        "empty_table_message",
        serde_json::to_value(&defaults.empty_table_message)?,
    );
    if !obj.contains_key("catalog_path") {
        obj.insert("catalog_path".to_string(), Value::Null);
    }

    let migrated_config: AppConfig = serde_json::from_value(Value::Object(obj.clone()))?;
    tracing::info!("Successfully migrated legacy config");
    Ok(migrated_config)
}

/// Saves the provided configuration to the config file.
pub fn save_config(config: &AppConfig, config_dir: Option<&Path>) -> Result<()> {
    let config_dir = resolve_config_directory(config_dir)?;

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
        tracing::info!("Created config directory: {:?}", config_dir);
    }

    let config_path = config_dir.join(CONFIG_FILE);
    let config_json = serde_json::to_string_pretty(config)?;

    fs::write(&config_path, config_json)?;
    tracing::info!("Saved config to {:?}", config_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ListingKind;

    #[test]
    fn test_missing_config_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(dir.path())).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            search_debounce_ms: 150,
            admin_page_size: 25,
            catalog_path: Some(PathBuf::from("/data/catalog.json")),
            default_feed: ListingKind::Idea,
            ..Default::default()
        };
        save_config(&config, Some(dir.path())).unwrap();
        assert_eq!(load_config(Some(dir.path())).unwrap(), config);
    }

    #[test]
    fn test_legacy_config_missing_fields_is_migrated() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "admin_page_size": 20, "search_debounce_ms": null }"#,
        )
        .unwrap();

        let config = load_config(Some(dir.path())).unwrap();
        assert_eq!(config.admin_page_size, 20);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.default_feed, ListingKind::Thesis);
        assert_eq!(config.catalog_path, None);
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_partial_config_logs_migration_not_fallback() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{ "admin_page_size": 5 }"#).unwrap();

        let config = load_config(Some(dir.path())).unwrap();
        assert_eq!(config.admin_page_size, 5);
        assert!(logs_contain("Attempting to migrate legacy config"));
        assert!(logs_contain("Successfully migrated legacy config"));
        assert!(!logs_contain("Using default config"));
    }

    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "this is not json").unwrap();
        let config = load_config(Some(dir.path())).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}

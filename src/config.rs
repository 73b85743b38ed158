use crate::core::api::DEFAULT_BASE_URL;
use crate::core::debounce::DEFAULT_DEBOUNCE_MS;
use crate::core::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::theme::ThemeChoice;
use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides `api_base_url` when set to a non-empty value
pub const API_URL_ENV: &str = "POSTBOARD_API_URL";

/// Upper bound for the search debounce delay
const MAX_DEBOUNCE_MS: u64 = 5_000;

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme_choice: ThemeChoice,
    /// Posts per page; must be one of the page-size picker options
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Clamped to 5000 ms
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Append store events to `events.log` in the state directory (opt-in)
    #[serde(default)]
    pub enable_event_log: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_choice: ThemeChoice::default(),
            page_size: DEFAULT_PAGE_SIZE,
            api_base_url: default_api_base_url(),
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
            enable_event_log: false,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl AppConfig {
    /// Replaces out-of-range values with their defaults
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if !PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            tracing::warn!(
                "Unsupported page size {} in config, using {}",
                self.page_size,
                DEFAULT_PAGE_SIZE
            );
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self.search_debounce_ms = self.search_debounce_ms.min(MAX_DEBOUNCE_MS);
        if self.api_base_url.trim().is_empty() {
            self.api_base_url = default_api_base_url();
        }
        self
    }

    /// Base URL after applying the `POSTBOARD_API_URL` override
    pub fn effective_base_url(&self) -> String {
        resolve_base_url(std::env::var(API_URL_ENV).ok(), &self.api_base_url)
    }
}

fn resolve_base_url(env_value: Option<String>, configured: &str) -> String {
    match env_value {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => configured.to_string(),
    }
}

fn config_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join("config.json"))
}

/// Saves the complete app config to disk using an atomic write pattern.
/// 1. Writes to a temporary file.
/// 2. Sets restrictive permissions (0o600).
/// 3. Atomically renames to the target path.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn save_config(config: &AppConfig) -> crate::Result<()> {
    match config_path() {
        Some(path) => save_config_to(config, &path).await,
        None => Ok(()),
    }
}

/// Atomic write of `config` to `path`
pub async fn save_config_to(config: &AppConfig, path: &Path) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    let temp_path = path.with_extension("json.tmp");

    // Create file with restrictive permissions from the start
    #[cfg(unix)]
    {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600)
            .open(&temp_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    #[cfg(not(unix))]
    {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::StorageFull {
            std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "Disk full: cannot save configuration. Free up space and try again.",
            )
        } else {
            e
        }
    })?;

    Ok(())
}

/// Loads the app config from disk, or returns default if not found.
pub async fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path).await,
        None => AppConfig::default(),
    }
}

pub async fn load_config_from(path: &Path) -> AppConfig {
    match tokio::fs::read_to_string(path).await {
        Ok(json) => parse_config(&json, path),
        Err(_) => AppConfig::default(),
    }
}

/// Synchronous variant for startup, before any runtime is driving the app.
pub fn load_config_blocking() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => parse_config(&json, &path),
        Err(_) => AppConfig::default(),
    }
}

/// Parses and sanitizes a config document.
///
/// # Errors
///
/// Returns [`crate::Error::Serialization`] if `json` is not a valid config.
pub fn parse_config_str(json: &str) -> crate::Result<AppConfig> {
    let config: AppConfig = serde_json::from_str(json)?;
    Ok(config.sanitized())
}

fn parse_config(json: &str, path: &Path) -> AppConfig {
    match parse_config_str(json) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring malformed config at {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

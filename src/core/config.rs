//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.recipe-feed/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{NewestQuery, PopularQuery, SortOrder};
use crate::api::types::{DEFAULT_POPULAR_LIMIT, DEFAULT_POPULAR_PAGE};
use crate::feed::FeedConfig;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RecipeFeedConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FeedSection {
    pub popular_limit: Option<u32>,
    pub popular_page: Option<u32>,
    pub newest_sort: Option<SortOrder>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://rich-blue-shrimp-wig.cyclic.app";
pub const BASE_URL_ENV: &str = "RECIPE_API_BASE_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub request_timeout: Option<Duration>,
    pub feed: FeedConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.recipe-feed/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".recipe-feed").join("config.toml"))
}

/// Load config from `~/.recipe-feed/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RecipeFeedConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RecipeFeedConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RecipeFeedConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<RecipeFeedConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(RecipeFeedConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RecipeFeedConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Recipe Feed Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://rich-blue-shrimp-wig.cyclic.app"   # Or set RECIPE_API_BASE_URL
# request_timeout_secs = 10                             # Unset: wait indefinitely

# [feed]
# popular_limit = 9
# popular_page = 1
# newest_sort = "asc"                                   # "asc" or "desc"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &RecipeFeedConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var(BASE_URL_ENV).ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let feed = FeedConfig {
        popular: PopularQuery {
            limit: config.feed.popular_limit.unwrap_or(DEFAULT_POPULAR_LIMIT),
            page: config.feed.popular_page.unwrap_or(DEFAULT_POPULAR_PAGE),
        },
        newest: NewestQuery {
            sort: config.feed.newest_sort.unwrap_or_default(),
        },
    };

    ResolvedConfig {
        base_url,
        request_timeout: config.api.request_timeout_secs.map(Duration::from_secs),
        feed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = RecipeFeedConfig::default();
        let resolved = resolve(&config, Some("http://cli"));
        assert_eq!(resolved.feed, FeedConfig::default());
        assert_eq!(resolved.feed.popular.limit, 9);
        assert_eq!(resolved.feed.popular.page, 1);
        assert_eq!(resolved.feed.newest.sort, SortOrder::Ascending);
        assert_eq!(resolved.request_timeout, None);
    }

    #[test]
    fn test_resolve_cli_base_url_wins() {
        let config = RecipeFeedConfig {
            api: ApiConfig {
                base_url: Some("http://from-file".to_string()),
                request_timeout_secs: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("http://from-cli"));
        assert_eq!(resolved.base_url, "http://from-cli");
    }

    #[test]
    fn test_toml_values_override_defaults() {
        let toml_str = r#"
[api]
base_url = "http://localhost:4000"
request_timeout_secs = 5

[feed]
popular_limit = 12
popular_page = 2
newest_sort = "desc"
"#;
        let config: RecipeFeedConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:4000"));
        let resolved = resolve(&config, Some("http://cli"));
        assert_eq!(resolved.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(resolved.feed.popular, PopularQuery { limit: 12, page: 2 });
        assert_eq!(resolved.feed.newest.sort, SortOrder::Descending);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: RecipeFeedConfig = toml::from_str("[feed]\npopular_limit = 3\n").unwrap();
        assert_eq!(config.feed.popular_limit, Some(3));
        assert!(config.feed.popular_page.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_bad_sort_value_is_rejected() {
        let result = toml::from_str::<RecipeFeedConfig>("[feed]\nnewest_sort = \"sideways\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_generated_default_parses_to_defaults() {
        let config: RecipeFeedConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.api.base_url.is_none());
        assert!(config.feed.newest_sort.is_none());
    }

    #[test]
    fn test_load_config_from_missing_path_writes_default() {
        let dir = std::env::temp_dir().join(format!("recipe-feed-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.api.base_url.is_none());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}

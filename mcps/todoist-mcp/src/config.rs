//! Configuration loading for todoist-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables (highest priority): TODOIST_API_TOKEN,
//!    TODOIST_API_URL, TODOIST_INBOX_PROJECT_ID, TODOIST_SOMEDAY_PROJECT_ID,
//!    TODOIST_WAITING_LABEL
//! 2. The file named by TODOIST_MCP_CONFIG_PATH
//! 3. ~/.binks/todoist.toml
//! 4. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::review::{ReviewScope, WAITING_FOR_LABEL};

/// Errors while loading or using configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{0} is not configured (set it in the [review] section or via {1})")]
    Missing(&'static str, &'static str),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub review: ReviewConfig,
}

/// Service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Personal API token
    #[serde(default)]
    pub token: String,
    /// REST API root
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Weekly review settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    #[serde(default)]
    pub inbox_project_id: Option<String>,
    #[serde(default)]
    pub someday_maybe_project_id: Option<String>,
    /// Label that marks tasks waiting on someone else
    #[serde(default = "default_waiting_label")]
    pub waiting_for_label: String,
}

fn default_base_url() -> String {
    "https://api.todoist.com/api/v1".to_string()
}

fn default_waiting_label() -> String {
    WAITING_FOR_LABEL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            inbox_project_id: None,
            someday_maybe_project_id: None,
            waiting_for_label: default_waiting_label(),
        }
    }
}

impl ReviewConfig {
    /// Resolve the review scope, letting explicit ids override configured ones
    ///
    /// Empty strings count as absent. An empty project id would otherwise
    /// turn its query into an unconstrained listing.
    pub fn scope(
        &self,
        inbox_project_id: Option<String>,
        someday_maybe_project_id: Option<String>,
    ) -> Result<ReviewScope, ConfigError> {
        let inbox_project_id = pick(inbox_project_id, &self.inbox_project_id).ok_or(
            ConfigError::Missing("inbox_project_id", "TODOIST_INBOX_PROJECT_ID"),
        )?;
        let someday_maybe_project_id =
            pick(someday_maybe_project_id, &self.someday_maybe_project_id).ok_or(
                ConfigError::Missing("someday_maybe_project_id", "TODOIST_SOMEDAY_PROJECT_ID"),
            )?;
        if self.waiting_for_label.is_empty() {
            return Err(ConfigError::Missing(
                "waiting_for_label",
                "TODOIST_WAITING_LABEL",
            ));
        }

        Ok(ReviewScope {
            inbox_project_id,
            someday_maybe_project_id,
            waiting_for_label: self.waiting_for_label.clone(),
        })
    }
}

/// First non-empty value of an explicit and a configured setting
fn pick(explicit: Option<String>, configured: &Option<String>) -> Option<String> {
    explicit
        .filter(|v| !v.is_empty())
        .or_else(|| configured.clone().filter(|v| !v.is_empty()))
}

impl Config {
    /// Load configuration from file (if any) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(&path)?
            }
            Some(_) => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok());

        if config.api.token.is_empty() {
            tracing::warn!("TODOIST_API_TOKEN is not set; requests will be rejected");
        }

        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from environment-style lookups; empty values are ignored
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(token) = get("TODOIST_API_TOKEN") {
            self.api.token = token;
        }
        if let Some(url) = get("TODOIST_API_URL") {
            self.api.base_url = url;
        }
        if let Some(id) = get("TODOIST_INBOX_PROJECT_ID") {
            self.review.inbox_project_id = Some(id);
        }
        if let Some(id) = get("TODOIST_SOMEDAY_PROJECT_ID") {
            self.review.someday_maybe_project_id = Some(id);
        }
        if let Some(label) = get("TODOIST_WAITING_LABEL") {
            self.review.waiting_for_label = label;
        }
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("TODOIST_MCP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        dirs::home_dir().map(|home| home.join(".binks").join("todoist.toml"))
    }
}

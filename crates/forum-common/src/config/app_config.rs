//! Application configuration structs
//!
//! Loads configuration from environment variables. Values that the
//! original deployment kept as process-wide constants (the default blog
//! type, content limits) are explicit fields here and get passed into
//! the service context rather than read ambiently.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub forum: ForumConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Content and rating settings
#[derive(Debug, Clone, Deserialize)]
pub struct ForumConfig {
    /// Taxonomy label assigned to newly created blogs
    #[serde(default = "default_blog_type")]
    pub default_blog_type: String,
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
    #[serde(default = "default_max_body_length")]
    pub max_body_length: usize,
    #[serde(default = "default_max_poll_answers")]
    pub max_poll_answers: usize,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            default_blog_type: default_blog_type(),
            max_title_length: default_max_title_length(),
            max_body_length: default_max_body_length(),
            max_poll_answers: default_max_poll_answers(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "forum-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_blog_type() -> String {
    "collective".to_string()
}

fn default_max_title_length() -> usize {
    300
}

fn default_max_body_length() -> usize {
    65536
}

fn default_max_poll_answers() -> usize {
    30
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but unparseable
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            forum: ForumConfig {
                default_blog_type: env::var("DEFAULT_BLOG_TYPE")
                    .unwrap_or_else(|_| default_blog_type()),
                max_title_length: parse_var("MAX_TITLE_LENGTH", default_max_title_length())?,
                max_body_length: parse_var("MAX_BODY_LENGTH", default_max_body_length())?,
                max_poll_answers: parse_var("MAX_POLL_ANSWERS", default_max_poll_answers())?,
            },
        })
    }
}

fn parse_var(name: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

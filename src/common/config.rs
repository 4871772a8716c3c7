//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::Result;

/// Base address used when neither the command line nor the config file sets one
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Base address of the API under test
    #[serde(default)]
    pub base_url: Option<String>,

    /// Values threaded into the scenario's request payloads
    #[serde(default)]
    pub fixtures: Fixtures,
}

/// Identifiers and literals the scenario assumes exist on the backend
#[derive(Debug, Clone, Deserialize)]
pub struct Fixtures {
    /// Lesson used by the progress and quiz phases
    #[serde(default = "default_lesson_id")]
    pub lesson_id: u64,

    /// Category the course is created in and filtered by
    #[serde(default = "default_category_id")]
    pub category_id: u64,

    /// User promoted from the admin dashboard phase
    #[serde(default = "default_promote_user_id")]
    pub promote_user_id: u64,

    /// Question answered during the quiz attempt
    #[serde(default = "default_quiz_question_id")]
    pub quiz_question_id: u64,

    /// Course search term
    #[serde(default = "default_search_term")]
    pub search_term: String,

    /// Domain of the registered users' addresses
    #[serde(default = "default_email_domain")]
    pub email_domain: String,

    /// Password shared by all registered users
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            lesson_id: default_lesson_id(),
            category_id: default_category_id(),
            promote_user_id: default_promote_user_id(),
            quiz_question_id: default_quiz_question_id(),
            search_term: default_search_term(),
            email_domain: default_email_domain(),
            password: default_password(),
        }
    }
}

fn default_lesson_id() -> u64 {
    1
}
fn default_category_id() -> u64 {
    1
}
fn default_promote_user_id() -> u64 {
    3
}
fn default_quiz_question_id() -> u64 {
    1
}

fn default_search_term() -> String {
    "javascript".to_string()
}

fn default_email_domain() -> String {
    "test.com".to_string()
}

fn default_password() -> String {
    "password123".to_string()
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }

    /// Resolve the base address: command line first, then config file, then default
    pub fn resolve_base_url(&self, cli_override: Option<String>) -> String {
        cli_override
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

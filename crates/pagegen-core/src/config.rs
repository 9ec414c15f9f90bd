//! Configuration for the generation pipeline.
//!
//! Stored as TOML in the platform config directory; every field has a
//! default so a missing or partial file is fine.
//!
//! ```toml
//! [generation]
//! candidates = ["gemini-2.5-pro", "gemini-2.0-flash"]
//! preferred = "gemini-2.5-pro"
//!
//! [fetch]
//! timeout_secs = 10
//! max_content_chars = 10000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, fetcher, prompt};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Model selection settings.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Fetch bounds.
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Model selection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Ordered model candidates tried until one succeeds.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
    /// Model tried before the candidate list, when set.
    #[serde(default)]
    pub preferred: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            preferred: None,
        }
    }
}

/// Fetch bounds applied to every competitor page request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum characters kept per page.
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_content_chars: default_max_content_chars(),
        }
    }
}

fn default_candidates() -> Vec<String> {
    prompt::DEFAULT_MODEL_CANDIDATES
        .iter()
        .map(ToString::to_string)
        .collect()
}

const fn default_timeout_secs() -> u64 {
    fetcher::FETCH_TIMEOUT.as_secs()
}

const fn default_max_content_chars() -> usize {
    fetcher::MAX_CONTENT_CHARS
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Platform config file location (`<config dir>/pagegen/config.toml`).
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "pagegen", "pagegen")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

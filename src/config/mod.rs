//! Project configuration from `config.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError
//! ├── util       # Config file search, URL checks
//! └── mod.rs     # ProjectConfig, base URL resolution (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                         |
//! |----------------|-------------------------------------------------|
//! | `[repository]` | Published base URL and custom domain            |
//!
//! Other sections of the template's config are ignored here.

mod error;
mod util;

pub use error::ConfigError;
pub use util::{find_config_file_from, is_absolute_url};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// Base URL used when neither the CLI nor the config file provide one
pub const DEFAULT_BASE_URL: &str = "https://assets.example.com";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Repository settings
    #[serde(default)]
    pub repository: RepositoryConfig,
}

/// `[repository]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryConfig {
    /// Public URL the built assets are served from
    pub base_url: Option<String>,

    /// Custom domain (empty for GitHub project sites)
    pub domain: Option<String>,
}

impl ProjectConfig {
    /// Load configuration for the current invocation.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent, or cwd when no config file exists. A config file
    /// that cannot be read or parsed is reported and replaced by defaults.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Ok(Self::load_from(&cwd, &cli.config))
    }

    /// Load configuration searching upward from `start`.
    pub fn load_from(start: &Path, config_name: &Path) -> Self {
        let Some(config_path) = find_config_file_from(start, config_name) else {
            debug!("config"; "no {} found, using defaults", config_name.display());
            return Self {
                root: start.to_path_buf(),
                ..Self::default()
            };
        };

        let mut config = match Self::from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                log!("warning"; "could not read {}: {}", config_path.display(), e);
                Self::default()
            }
        };

        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| start.to_path_buf());
        config.config_path = Some(config_path);
        config
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Resolve the base URL: explicit override > `[repository] base_url` > default.
    pub fn resolve_base_url(&self, override_url: Option<&str>) -> BaseUrl {
        let (value, source) = match (override_url, self.repository.base_url.as_deref()) {
            (Some(url), _) => (url, BaseUrlSource::Cli),
            (None, Some(url)) => (url, BaseUrlSource::Config),
            (None, None) => (DEFAULT_BASE_URL, BaseUrlSource::Default),
        };
        BaseUrl {
            value: value.to_string(),
            source,
        }
    }
}

// ============================================================================
// base url
// ============================================================================

/// Where the resolved base URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Cli,
    Config,
    Default,
}

impl fmt::Display for BaseUrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cli => "--base-url",
            Self::Config => "config.toml",
            Self::Default => "default",
        })
    }
}

/// A resolved base URL and its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    pub value: String,
    pub source: BaseUrlSource,
}

impl BaseUrl {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the value parses as an absolute URL with a host
    pub fn is_valid(&self) -> bool {
        is_absolute_url(&self.value)
    }
}

// ============================================================================
// tests
// ============================================================================

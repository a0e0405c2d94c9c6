//! # Configuration Management
//!
//! Resolves the API endpoint and access token for the client. Sources are
//! layered, lowest precedence first: built-in defaults, the `config.toml` file
//! in the platform config directory, the `SRC_URL` / `SRC_TOKEN` environment
//! variables, and finally explicit overrides (CLI flags).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://sourcegraph.com/api";

/// Environment variable overriding the API endpoint.
pub const ENV_SRC_URL: &str = "SRC_URL";

/// Environment variable holding the API access token.
pub const ENV_SRC_TOKEN: &str = "SRC_TOKEN";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {path}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("failed to parse config file {path}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
  #[error("invalid API URL {input:?}")]
  InvalidUrl {
    input: String,
    #[source]
    source: url::ParseError,
  },
  #[error("API URL cannot be empty")]
  EmptyUrl,
}

/// Contents of the optional `config.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
  /// API endpoint, e.g. `https://sourcegraph.example.com/api`
  #[serde(default)]
  pub url: Option<String>,
  #[serde(default)]
  pub token: Option<String>,
}

impl ConfigFile {
  /// Path of the config file in the platform config directory, if one can be
  /// determined for the current user.
  pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "sourcegraph", "srcgraph").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
  }

  /// Load a config file. A file that does not exist yields `None`.
  pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = %path.display(), "No config file found");
        return Ok(None);
      }
      Err(source) => {
        return Err(ConfigError::Read {
          path: path.to_path_buf(),
          source,
        });
      }
    };

    let file = toml::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(Some(file))
  }
}

/// Explicit overrides, typically from command line flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub url: Option<String>,
  pub token: Option<String>,
}

/// Fully resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
  pub base_url: Url,
  pub token: Option<String>,
}

impl ClientConfig {
  /// Configuration for the given endpoint with no token.
  pub fn new(base_url: &str) -> Result<Self, ConfigError> {
    Ok(Self {
      base_url: ensure_url_scheme(base_url)?,
      token: None,
    })
  }

  pub fn with_token(mut self, token: impl Into<String>) -> Self {
    self.token = Some(token.into());
    self
  }

  /// Merge all configuration layers. `env` looks up an environment variable.
  pub fn resolve<F>(file: Option<ConfigFile>, env: F, overrides: Overrides) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let file = file.unwrap_or_default();
    let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    let url = non_empty(overrides.url)
      .or_else(|| non_empty(env(ENV_SRC_URL)))
      .or_else(|| non_empty(file.url))
      .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let token = non_empty(overrides.token)
      .or_else(|| non_empty(env(ENV_SRC_TOKEN)))
      .or_else(|| non_empty(file.token));

    debug!(url = %url, has_token = token.is_some(), "Resolved client configuration");

    Ok(Self {
      base_url: ensure_url_scheme(&url)?,
      token,
    })
  }

  /// Resolve configuration from the default config file and the process
  /// environment.
  pub fn load(overrides: Overrides) -> Result<Self, ConfigError> {
    let file = match ConfigFile::default_path() {
      Some(path) => ConfigFile::load(&path)?,
      None => None,
    };
    Self::resolve(file, |key| std::env::var(key).ok(), overrides)
  }

  /// The base URL without a trailing slash, ready for a route path to be
  /// appended.
  pub fn base(&self) -> &str {
    self.base_url.as_str().trim_end_matches('/')
  }
}

/// Parse an endpoint URL, assuming `https://` when no scheme is given.
pub fn ensure_url_scheme(input: &str) -> Result<Url, ConfigError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(ConfigError::EmptyUrl);
  }

  let lowered = trimmed.to_ascii_lowercase();
  let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  Url::parse(&candidate).map_err(|source| ConfigError::InvalidUrl {
    input: input.to_string(),
    source,
  })
}

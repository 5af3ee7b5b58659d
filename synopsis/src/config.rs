// src/config.rs
use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;
use crate::models::{GenerationSettings, ModelChoice};

pub const CONFIG_FILE_NAME: &str = ".synopsis.toml";

/// Hosted Hugging Face Inference API; the model id is appended to it.
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

pub const DEFAULT_TOKEN_ENV: &str = "HF_TOKEN";

/// Settings read from `.synopsis.toml`. Every key is optional.
///
/// ```toml
/// model = "distil-bart"
/// endpoint = "http://localhost:8080/models"
/// token_env = "HF_TOKEN"
///
/// [generation]
/// max_length = 200
/// min_length = 40
/// sampling = true
/// temperature = 0.8
/// top_p = 0.9
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub model: ModelChoice,
    pub endpoint: String,
    /// Name of the environment variable holding the API token.
    pub token_env: String,
    pub generation: GenerationSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelChoice::default(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            token_env: DEFAULT_TOKEN_ENV.to_owned(),
            generation: GenerationSettings::default(),
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Returns the TOML error if `content` is not a valid config.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Finds the nearest `.synopsis.toml`, starting at `dir` and walking up
    /// through its parents.
    #[must_use]
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let mut current_dir = dir.to_path_buf();
        let mut visited = HashSet::new();

        while visited.insert(current_dir.clone()) {
            let candidate = current_dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            match current_dir.parent() {
                Some(parent) => current_dir = parent.to_path_buf(),
                None => break,
            }
        }

        None
    }

    /// Loads `explicit` when given, otherwise the nearest discovered config
    /// file, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the chosen file cannot be read or parsed.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(cwd),
        };

        match path {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// API token from the configured environment variable, if set.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        env::var(&self.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{CONFIG_FILE, TOKEN_ENV_VAR};
use crate::error::{SearchError, SearchResult};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub token: Option<String>,
    /// GraphQL endpoint; GitHub.com when unset.
    pub api_url: Option<String>,
    pub default_owner: Option<String>,
    pub default_repository: Option<String>,
}

pub fn config_path() -> SearchResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| SearchError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

/// Load the user's config, falling back to defaults when it is missing or unreadable.
pub fn load_config() -> Config {
    match config_path().and_then(|path| load_config_from(&path)) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "using default configuration");
            Config::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> SearchResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str)
        .map_err(|e| SearchError::ConfigError(format!("{}: {}", path.display(), e)))
}

pub fn save_config(config: &Config) -> SearchResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> SearchResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

/// The API token, from the environment first and then the config file.
pub fn get_token() -> SearchResult<String> {
    if let Ok(token) = env::var(TOKEN_ENV_VAR) {
        if !token.trim().is_empty() {
            return Ok(token);
        }
    }

    load_config().token.ok_or(SearchError::TokenNotFound)
}

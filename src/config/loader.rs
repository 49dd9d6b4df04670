// Configuration loader
// Loads ~/.yolokit/config.toml, falling back to built-in defaults

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;

/// Environment variable overriding `[python] interpreter`
pub const PYTHON_ENV: &str = "YOLOKIT_PYTHON";

/// Location of the user config file, if a home directory is known
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".yolokit/config.toml"))
}

/// Load configuration from the user config file and environment
pub fn load_config() -> Result<Config> {
    let config = load_config_or_default(config_path().as_deref())?;
    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

/// Load from `path`, or use the defaults when there is no config location at all
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config_from(path),
        None => Ok(Config::default()),
    }
}

/// Load configuration from `path`; a missing file yields the defaults
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Apply environment overrides using `lookup` to read variables
pub fn apply_env_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(interpreter) = lookup(PYTHON_ENV).filter(|v| !v.trim().is_empty()) {
        config.python.interpreter = interpreter;
    }
    config
}

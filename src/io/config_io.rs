use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TODO_CONFIG";
/// Config file picked up from the working directory
pub const LOCAL_CONFIG_FILE: &str = "todo.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where the loaded config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve and load the config.
///
/// Order: `explicit` path, then `env_path` (from `TODO_CONFIG`), then
/// `todo.toml` in `cwd`, then built-in defaults. An explicitly named file
/// must exist; the working-directory file is optional.
pub fn load_config(
    explicit: Option<&Path>,
    env_path: Option<&Path>,
    cwd: &Path,
) -> Result<(Config, ConfigSource), ConfigError> {
    if let Some(path) = explicit.or(env_path) {
        let config = read_config(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        let config = read_config(&local)?;
        return Ok((config, ConfigSource::File(local)));
    }

    Ok((Config::default(), ConfigSource::Defaults))
}

/// [`load_config`] using the process environment and working directory
pub fn load_config_from_env(
    explicit: Option<&Path>,
) -> Result<(Config, ConfigSource), ConfigError> {
    let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config(explicit, env_path.as_deref(), &cwd)
}

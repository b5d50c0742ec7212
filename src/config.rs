use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Version pattern used for version folders when none is given
pub const DEFAULT_VERSION_PATTERN: &str = "v###";

/// Suffix inserted between stem and extension when publishing
pub const DEFAULT_PUBLISH_VERSION_PATTERN: &str = "_v###";

const APP_NAME: &str = "version-up";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Pattern for `auto` and `number` when none is given
    pub default_version_pattern: String,
    /// Pattern appended to file stems by `publish`
    pub publish_version_pattern: String,
    /// Collapse repeated underscores in filenames before versioning
    pub normalize_filenames: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_version_pattern: DEFAULT_VERSION_PATTERN.to_string(),
            publish_version_pattern: DEFAULT_PUBLISH_VERSION_PATTERN.to_string(),
            normalize_filenames: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the data directory for version-up.
/// Uses $XDG_DATA_HOME/version-up if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-up,
/// or ./version-up if neither is available.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the config directory for version-up.
/// Uses $XDG_CONFIG_HOME/version-up if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/version-up.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-up.log")
}

fn dir_with_env(xdg_home: Option<String>, home_dir: Option<PathBuf>, home_suffix: &str) -> PathBuf {
    let base = xdg_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_suffix)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_NAME)
}

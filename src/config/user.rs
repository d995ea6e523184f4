//! User configuration loading for mtf-normalize.
//!
//! User config location: $XDG_CONFIG_HOME/mtf-normalize/mtf-normalize.toml
//! Fallback: the platform config directory (e.g. ~/.config on Linux)

use super::settings::NormalizerSettings;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "mtf-normalize";
const CONFIG_FILE: &str = "mtf-normalize.toml";

/// Errors raised while reading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Returns the path to the user configuration file.
///
/// 1. If $XDG_CONFIG_HOME is set and non-empty: $XDG_CONFIG_HOME/mtf-normalize/mtf-normalize.toml
/// 2. Otherwise: `dirs::config_dir()`/mtf-normalize/mtf-normalize.toml
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return Some(PathBuf::from(xdg_config).join(APP_DIR).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Parse settings from TOML text. `path` is only used in error messages.
pub fn parse_settings(contents: &str, path: &Path) -> ConfigResult<NormalizerSettings> {
    toml::from_str::<NormalizerSettings>(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from an explicit file.
pub fn load_settings(path: &Path) -> ConfigResult<NormalizerSettings> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&contents, path)?;
    log::debug!(
        target: "mtf_normalize::config",
        "Loaded {} alias categories from {}",
        settings.aliases.len(),
        path.display()
    );
    Ok(settings)
}

/// Load the user config file if it exists.
///
/// A missing file is not an error; an unreadable or malformed one is.
pub fn load_user_config() -> ConfigResult<Option<NormalizerSettings>> {
    match user_config_path() {
        Some(path) if path.is_file() => load_settings(&path).map(Some),
        Some(path) => {
            log::debug!(
                target: "mtf_normalize::config",
                "No user config at {}",
                path.display()
            );
            Ok(None)
        }
        None => Ok(None),
    }
}

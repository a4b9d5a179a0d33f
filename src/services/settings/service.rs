use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::WidgetConfig;

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PPT_COUNTDOWN_CONFIG";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Where the config file is expected: `$PPT_COUNTDOWN_CONFIG` when set,
/// otherwise `config.toml` in the platform config directory.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(explicit));
    }

    ProjectDirs::from("com", "PptCountdown", "PptCountdown")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load and sanitize the config at `path`. A missing file is not an error
/// and yields the defaults.
pub fn load_config(path: &Path) -> Result<WidgetConfig, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(WidgetConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: WidgetConfig = toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded config from {}", path.display());
    Ok(config.sanitized())
}

/// Startup entry point: configuration problems are logged and never fatal.
pub fn load_config_or_default() -> WidgetConfig {
    let Some(path) = resolve_config_path() else {
        log::warn!("Unable to resolve config directory; using default settings");
        return WidgetConfig::default();
    };

    match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}, using defaults", e);
            WidgetConfig::default()
        }
    }
}

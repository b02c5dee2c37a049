//! # Configuration Loader
//!
//! Reads the TOML configuration file and maps it into the `AppConfig` DTO.
//! Defaults for missing keys live with the DTO, not here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use lb_core::config::AppConfig;
use tracing::info;

const APP_DIR: &str = "linkbio";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - A known key has the wrong type (mapping error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

/// `<config dir>/linkbio/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Loads `path`, or the default path when `None`. A missing file means
/// "use defaults"; an unreadable or malformed file is an error.
pub fn resolve_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => path,
        None => {
            info!("no config directory on this platform, using defaults");
            return Ok(AppConfig::default());
        }
    };
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        return Ok(AppConfig::default());
    }
    load_config(path)
}

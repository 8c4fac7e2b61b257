//! Settings loading and overrides

use std::path::{Path, PathBuf};

use suitehub_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "suite-hub";
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding `server.base_url`
pub const URL_ENV_VAR: &str = "SUITEHUB_URL";

/// Default config file location (`~/.config/suite-hub/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or the default location when `None`
///
/// A missing file yields defaults. A malformed file is logged and also yields
/// defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply the base URL overrides: the command line wins over the environment
pub fn apply_url_override(settings: &mut Settings, cli_url: Option<&str>, env_url: Option<&str>) {
    let chosen = cli_url
        .filter(|u| !u.trim().is_empty())
        .or_else(|| env_url.filter(|u| !u.trim().is_empty()));

    if let Some(url) = chosen {
        debug!("Server URL overridden: {}", url);
        settings.server.base_url = url.trim().to_string();
    }
}

/// Write a commented default config file if none exists yet
pub fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let default_content = r#"# Suite Hub Configuration

[server]
# Base URL of the Suite Hub API
base_url = "http://127.0.0.1:5113"
# Request timeout in seconds
timeout_secs = 10

[behavior]
# Owner used when the new-suite form leaves it blank
default_owner = "DAM2 Team"
# Select the first suite after loading when none is active
auto_select_first = true

[ui]
# Seconds an info notice stays visible
notice_secs = 4
show_hints = true
"#;

    std::fs::write(path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", path);

    Ok(())
}

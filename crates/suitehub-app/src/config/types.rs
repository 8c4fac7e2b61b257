//! Configuration types for Suite Hub
//!
//! Defines `Settings` and its sections, as read from `config.toml`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use suitehub_remote::RemoteSettings;

/// Application settings (`~/.config/suite-hub/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the Suite Hub API lives
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the API service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerSettings {
    pub fn remote_settings(&self) -> RemoteSettings {
        RemoteSettings {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Owner label used when the create form leaves the owner blank
    #[serde(default = "default_owner")]
    pub default_owner: String,

    /// Select the first suite after loading when none is active
    #[serde(default = "default_true")]
    pub auto_select_first: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            default_owner: default_owner(),
            auto_select_first: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Seconds an info or warning notice stays in the status line
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,

    /// Show key hints in the status bar
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            notice_secs: default_notice_secs(),
            show_hints: true,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5113".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_owner() -> String {
    "DAM2 Team".to_string()
}

fn default_notice_secs() -> u64 {
    4
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://127.0.0.1:5113");
        assert_eq!(settings.server.timeout_secs, 10);
        assert_eq!(settings.behavior.default_owner, "DAM2 Team");
        assert!(settings.behavior.auto_select_first);
        assert_eq!(settings.ui.notice_secs, 4);
        assert!(settings.ui.show_hints);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[server]
timeout_secs = 3
"#,
        )
        .unwrap();
        assert_eq!(settings.server.timeout_secs, 3);
        assert_eq!(settings.server.base_url, "http://127.0.0.1:5113");
        assert_eq!(settings.behavior, BehaviorSettings::default());
    }

    #[test]
    fn test_remote_settings_never_zero_timeout() {
        let server = ServerSettings {
            base_url: "http://hub".into(),
            timeout_secs: 0,
        };
        assert_eq!(server.remote_settings().timeout, Duration::from_secs(1));
    }
}

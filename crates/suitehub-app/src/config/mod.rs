//! Configuration file parsing for Suite Hub
//!
//! Supports `~/.config/suite-hub/config.toml` (or an explicit `--config`
//! path) plus the `SUITEHUB_URL` / `--url` overrides.

pub mod settings;
pub mod types;

pub use settings::{
    apply_url_override, default_config_path, init_config_file, load_settings, URL_ENV_VAR,
};
pub use types::*;

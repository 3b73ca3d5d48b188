//! Startup configuration: `<data_dir>/config.json` plus env overrides.
//!
//! Read once at startup and immutable thereafter. Unknown keys are
//! ignored; missing keys take the documented defaults; a malformed file
//! logs a warning and falls back to defaults entirely.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default control-plane port.
pub const DEFAULT_CONTROL_PORT: u16 = 17839;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Panel window geometry.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PanelGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            x: 40,
            y: 60,
            width: 420,
            height: 520,
        }
    }
}

/// Immutable merged settings for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HubConfig {
    /// Terminal application to raise on click.
    pub terminal_app: String,
    /// Whether multiplexer focus actions are issued at all.
    pub multiplexer_enabled: bool,
    /// Path or name of the multiplexer binary.
    pub multiplexer_path: String,
    /// Loopback control-plane port.
    pub control_port: u16,
    /// Global hotkey chord toggling the panel (consumed by the host).
    pub hotkey: String,
    pub language: String,
    /// Initial panel theme, `dark` or `light`.
    pub theme: String,
    pub panel_geometry: PanelGeometry,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            terminal_app: "Terminal".into(),
            multiplexer_enabled: true,
            multiplexer_path: "tmux".into(),
            control_port: DEFAULT_CONTROL_PORT,
            hotkey: "cmd+alt+n".into(),
            language: "en".into(),
            theme: "dark".into(),
            panel_geometry: PanelGeometry::default(),
        }
    }
}

impl HubConfig {
    /// Load from a JSON file, then apply env overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&text)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load, falling back to defaults on a missing or malformed file.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            match Self::load(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Ignoring config at {}: {e}", path.display());
                }
            }
        }
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// `SESSION_BELL_PORT` wins over the file value.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SESSION_BELL_PORT") {
            if let Ok(port) = v.parse::<u16>() {
                self.control_port = port;
            }
        }
    }
}

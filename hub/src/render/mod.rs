//! Dual-surface rendering: the persistent panel and the ephemeral toast.
//!
//! Renderers are pure functions from a view model to markup; untrusted
//! text only enters the markup as `safe_text::SafeText`.

pub mod panel;
pub mod toast;

use crate::config::HubConfig;
use crate::store::NotifyFilter;

pub const MIN_OPACITY: f32 = 0.1;
pub const MAX_OPACITY: f32 = 1.0;
pub const MIN_FONT_SIZE: u32 = 10;
pub const MAX_FONT_SIZE: u32 = 20;
const DEFAULT_FONT_SIZE: u32 = 14;

/// Panel color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Parse the control-plane path segment (`dark` | `light`).
    pub fn from_path(mode: &str) -> Option<Self> {
        match mode {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Light => "theme-light",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Process-lifetime presentation state, mutated only through the
/// control-plane handlers. Setters clamp into the documented ranges.
#[derive(Debug, Clone)]
pub struct PanelState {
    opacity: f32,
    filter: NotifyFilter,
    font_size: u32,
    theme: Theme,
}

impl PanelState {
    pub fn from_config(config: &HubConfig) -> Self {
        Self {
            opacity: MAX_OPACITY,
            filter: NotifyFilter::All,
            font_size: DEFAULT_FONT_SIZE,
            theme: Theme::from_path(&config.theme).unwrap_or(Theme::Dark),
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn filter(&self) -> NotifyFilter {
        self.filter
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_opacity(&mut self, value: f32) {
        self.opacity = value.clamp(MIN_OPACITY, MAX_OPACITY);
    }

    pub fn set_filter(&mut self, filter: NotifyFilter) {
        self.filter = filter;
    }

    pub fn set_font_size(&mut self, value: u32) {
        self.font_size = value.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

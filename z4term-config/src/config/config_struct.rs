//! Core `Config` struct definition.

use crate::types::KeyBinding;
use serde::{Deserialize, Serialize};

/// User-facing configuration, stored as YAML in `~/.config/z4term/config.yaml`.
///
/// Every field has a serde default so partial files load cleanly; values are
/// normalized by [`Config::validate`] after each load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Font family handed to every terminal surface
    #[serde(default = "crate::defaults::font_family")]
    pub font_family: String,

    /// Font size in points
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: u32,

    /// Scrollback buffer size in lines
    #[serde(default = "crate::defaults::scrollback")]
    pub scrollback_lines: usize,

    /// Shell executable; `None` means `$SHELL`
    #[serde(default)]
    pub shell: Option<String>,

    /// Built-in theme name
    #[serde(default = "crate::defaults::theme")]
    pub theme: String,

    /// Background opacity (0.1 - 1.0)
    #[serde(default = "crate::defaults::opacity")]
    pub opacity: f32,

    /// Seconds a pane must be unfocused before its bell notifies
    #[serde(default = "crate::defaults::notification_threshold")]
    pub notification_threshold: u64,

    /// Keybindings in registration order
    #[serde(default = "crate::defaults::keybindings")]
    pub keybindings: Vec<KeyBinding>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_family: crate::defaults::font_family(),
            font_size: crate::defaults::font_size(),
            scrollback_lines: crate::defaults::scrollback(),
            shell: None,
            theme: crate::defaults::theme(),
            opacity: crate::defaults::opacity(),
            notification_threshold: crate::defaults::notification_threshold(),
            keybindings: crate::defaults::keybindings(),
        }
    }
}

//! Normalization applied to every loaded config.
//!
//! Out-of-range values are clamped and unusable values fall back to their
//! defaults; nothing here fails a load.

use super::config_struct::Config;
use crate::defaults::{FALLBACK_SHELL, MAX_SCROLLBACK, MIN_SCROLLBACK};
use crate::themes::Theme;
use std::path::Path;

impl Config {
    /// Clamp numeric ranges and replace unknown theme / unusable shell values.
    pub fn validate(&mut self) {
        if Theme::by_name(&self.theme).is_none() {
            log::warn!(
                "Unknown theme '{}', falling back to '{}'",
                self.theme,
                crate::defaults::theme()
            );
            self.theme = crate::defaults::theme();
        }

        let opacity = if self.opacity.is_finite() {
            self.opacity
        } else {
            crate::defaults::opacity()
        };
        self.opacity = opacity.clamp(0.1, 1.0);

        self.scrollback_lines = self.scrollback_lines.clamp(MIN_SCROLLBACK, MAX_SCROLLBACK);

        let shell = self.resolve_shell();
        self.shell = Some(shell);
    }

    /// The shell to spawn: config value, then `$SHELL`, then `/bin/bash`.
    ///
    /// The chosen value must be an existing executable file, otherwise the
    /// fallback shell is used.
    pub fn resolve_shell(&self) -> String {
        let candidate = self
            .shell
            .clone()
            .or_else(|| std::env::var("SHELL").ok())
            .unwrap_or_else(|| FALLBACK_SHELL.to_string());

        if is_executable(Path::new(&candidate)) {
            candidate
        } else {
            log::warn!(
                "Shell '{}' is not an executable file, using {}",
                candidate,
                FALLBACK_SHELL
            );
            FALLBACK_SHELL.to_string()
        }
    }

    /// Resolved color theme for this config
    pub fn resolved_theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_default()
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

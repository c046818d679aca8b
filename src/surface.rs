//! Terminal-surface collaborator contract.
//!
//! A surface is the external widget that runs a shell, emulates the terminal
//! and renders it. The pane tree only holds surfaces as opaque leaf payloads
//! and talks to them through [`TerminalSurface`].

use regex::Regex;
use z4term_config::{Config, Theme};

/// Capabilities the window needs from a live terminal surface.
pub trait TerminalSurface {
    /// Current working directory of the foreground shell, if it can be read
    fn current_dir(&self) -> Option<String>;

    /// Title set by the running program, if any
    fn title(&self) -> Option<String>;

    fn has_selection(&self) -> bool;

    /// Copy the selection as plain text to the clipboard
    fn copy_selection(&mut self);

    /// Paste the clipboard into the shell
    fn paste_clipboard(&mut self);

    fn grab_focus(&mut self);

    fn apply_font(&mut self, family: &str, size: u32);

    /// Set or clear the search pattern. Matching wraps around.
    fn set_search_pattern(&mut self, pattern: Option<&Regex>);

    /// Move to the next match; returns false when there is none
    fn search_next(&mut self) -> bool;

    /// Move to the previous match; returns false when there is none
    fn search_previous(&mut self) -> bool;
}

/// Spawns a shell inside a new terminal surface.
pub trait SurfaceFactory {
    /// Spawn a surface whose shell starts in `cwd` (or the home directory).
    fn spawn(
        &self,
        cwd: Option<&str>,
        options: &SurfaceOptions,
    ) -> anyhow::Result<Box<dyn TerminalSurface>>;
}

/// Notifications a surface raises, delivered by the host to the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    TitleChanged(String),
    Bell,
    ContentsChanged,
    FocusIn,
    FocusOut,
    /// The shell exited with the given status
    ChildExited(i32),
}

/// Everything a factory needs to configure a new surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOptions {
    pub font_family: String,
    pub font_size: u32,
    pub scrollback_lines: usize,
    /// Shell to execute
    pub shell: String,
    pub theme: Theme,
    /// Background opacity (0.1 - 1.0)
    pub opacity: f32,
}

impl SurfaceOptions {
    /// Build options from a validated config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            font_family: config.font_family.clone(),
            font_size: config.font_size,
            scrollback_lines: config.scrollback_lines,
            shell: config
                .shell
                .clone()
                .unwrap_or_else(|| config.resolve_shell()),
            theme: config.resolved_theme(),
            opacity: config.opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_config() {
        let mut config = Config {
            theme: "dracula".to_string(),
            shell: Some("/definitely/missing".to_string()),
            ..Config::default()
        };
        config.validate();

        let options = SurfaceOptions::from_config(&config);
        assert_eq!(options.theme.name, "dracula");
        assert_eq!(options.shell, z4term_config::defaults::FALLBACK_SHELL);
        assert_eq!(options.font_size, 12);
    }
}

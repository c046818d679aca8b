//! Search bar state and pattern handling

use super::WindowState;
use regex::{Regex, RegexBuilder};
use winit::keyboard::NamedKey;
use z4term_keybindings::{KeyEvent, KeySym, Modifiers};

/// State of the window's search bar
#[derive(Debug, Default)]
pub struct SearchState {
    visible: bool,
    text: String,
}

impl SearchState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Text currently typed into the search bar
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Literal, case-insensitive pattern for `text`
pub fn search_pattern(text: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(text))
        .case_insensitive(true)
        .build()
        .ok()
}

impl WindowState {
    /// Show or hide the search bar
    pub fn toggle_search(&mut self) {
        if self.search.visible {
            self.hide_search();
        } else {
            self.search.visible = true;
            crate::debug_info!("SEARCH", "Search bar shown");
        }
    }

    /// Hide the search bar, clear the pattern and give focus back to the pane
    pub fn hide_search(&mut self) {
        self.search.visible = false;
        if let Some(pane) = self.tab_manager.focused_pane_mut() {
            let surface = pane.surface_mut();
            surface.set_search_pattern(None);
            surface.grab_focus();
        }
        crate::debug_info!("SEARCH", "Search bar hidden");
    }

    /// Update the search text and jump to the closest match above the cursor.
    ///
    /// Empty text leaves the current pattern in place.
    pub fn set_search_text(&mut self, text: &str) {
        self.search.text = text.to_string();
        if text.is_empty() {
            return;
        }
        let Some(pattern) = search_pattern(text) else {
            return;
        };
        if let Some(pane) = self.tab_manager.focused_pane_mut() {
            let surface = pane.surface_mut();
            surface.set_search_pattern(Some(&pattern));
            surface.search_previous();
        }
    }

    pub fn search_next(&mut self) -> bool {
        self.tab_manager
            .focused_pane_mut()
            .is_some_and(|p| p.surface_mut().search_next())
    }

    pub fn search_previous(&mut self) -> bool {
        self.tab_manager
            .focused_pane_mut()
            .is_some_and(|p| p.surface_mut().search_previous())
    }

    /// Keys typed while the search entry has focus: Escape hides the bar,
    /// Enter steps to the next match and Shift+Enter to the previous one.
    ///
    /// Returns true when the key was consumed.
    pub fn handle_search_key(&mut self, event: &KeyEvent) -> bool {
        match event.key {
            KeySym::Named(NamedKey::Escape) => {
                self.hide_search();
                true
            }
            KeySym::Named(NamedKey::Enter) => {
                if event.modifiers.contains(Modifiers::SHIFT) {
                    self.search_previous();
                } else {
                    self.search_next();
                }
                true
            }
            _ => false,
        }
    }
}

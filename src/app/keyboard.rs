//! Key event resolution
//!
//! A key event is looked up in the keymap first. Unbound events fall through
//! to two fixed bindings: Ctrl+C copies when the focused pane has a selection
//! (otherwise the terminal gets it and sends the interrupt), and Ctrl+V
//! pastes.

use super::WindowState;
use winit::keyboard::{Key, ModifiersState};
use z4term_keybindings::KeyEvent;

/// What a key event resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResolution {
    /// A keymap action
    Action(String),
    /// Smart Ctrl+C with an active selection
    Copy,
    /// Smart Ctrl+V
    Paste,
    /// Not handled by the window; deliver to the terminal
    Unhandled,
}

impl WindowState {
    /// Resolve a key event without acting on it
    pub fn resolve(&self, event: &KeyEvent) -> KeyResolution {
        if let Some(action) = self.keymap.lookup(event) {
            return KeyResolution::Action(action.to_string());
        }

        if event.is_ctrl_letter('c') {
            let has_selection = self
                .tab_manager
                .focused_pane()
                .is_some_and(|p| p.surface().has_selection());
            return if has_selection {
                KeyResolution::Copy
            } else {
                KeyResolution::Unhandled
            };
        }

        if event.is_ctrl_letter('v') && self.tab_manager.focused_pane().is_some() {
            return KeyResolution::Paste;
        }

        KeyResolution::Unhandled
    }

    /// Handle a key press. Returns true when the event was consumed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let resolution = self.resolve(event);
        crate::debug_log!("KEY", "{:?} -> {:?}", event, resolution);
        match resolution {
            KeyResolution::Action(action) => self.execute_keybinding_action(&action),
            KeyResolution::Copy => {
                self.copy_selection();
                true
            }
            KeyResolution::Paste => {
                self.paste_clipboard();
                true
            }
            KeyResolution::Unhandled => false,
        }
    }

    /// Handle a winit key press. Keys without a symbolic identity are
    /// never consumed.
    pub fn handle_winit_key(&mut self, logical_key: &Key, modifiers: ModifiersState) -> bool {
        match KeyEvent::from_winit(logical_key, modifiers) {
            Some(event) => self.handle_key(&event),
            None => false,
        }
    }

    pub(crate) fn copy_selection(&mut self) {
        if let Some(pane) = self.tab_manager.focused_pane_mut() {
            pane.surface_mut().copy_selection();
        }
    }

    pub(crate) fn paste_clipboard(&mut self) {
        if let Some(pane) = self.tab_manager.focused_pane_mut() {
            pane.surface_mut().paste_clipboard();
        }
    }
}

//! Key event normalization.
//!
//! Converts winit key events into the same (key, modifier-mask) shape the
//! parser produces so they can be looked up in a [`crate::Keymap`].

use super::parser::{KeySym, Modifiers, Trigger};
use winit::keyboard::{Key, ModifiersState};

/// A key press reduced to the fields that take part in binding lookup.
///
/// Only the tracked modifiers (ctrl, shift, alt) are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: KeySym,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Build an event, masking off untracked modifier bits.
    pub fn new(key: KeySym, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers: modifiers & Modifiers::TRACKED,
        }
    }

    /// Build an event from winit's logical key and modifier state.
    ///
    /// Returns `None` for keys with no symbolic identity (dead keys,
    /// unidentified keys, multi-character input).
    pub fn from_winit(logical_key: &Key, state: ModifiersState) -> Option<Self> {
        let key = match logical_key {
            Key::Character(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeySym::Character(c),
                    _ => return None,
                }
            }
            Key::Named(named) => KeySym::Named(*named),
            _ => return None,
        };

        Some(Self::new(key, modifiers_from_state(state)))
    }

    /// True when the event is `letter` (either case) with ctrl held and
    /// shift released. Alt does not matter.
    pub fn is_ctrl_letter(&self, letter: char) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
            && !self.modifiers.contains(Modifiers::SHIFT)
            && self.key.to_lower() == KeySym::Character(letter).to_lower()
    }

    /// The lookup trigger for this event
    pub fn trigger(&self) -> Trigger {
        Trigger::new(self.key, self.modifiers)
    }
}

/// Convert winit modifier state into the tracked mask.
pub fn modifiers_from_state(state: ModifiersState) -> Modifiers {
    let mut mods = Modifiers::empty();
    if state.control_key() {
        mods |= Modifiers::CTRL;
    }
    if state.shift_key() {
        mods |= Modifiers::SHIFT;
    }
    if state.alt_key() {
        mods |= Modifiers::ALT;
    }
    mods
}

//! Keybinding system for z4term.
//!
//! Turns the `{key, action}` entries of the user's config.yaml into a
//! lookup table from normalized triggers to action names.
//!
//! Features:
//! - Case-insensitive modifier names, GDK-style key names (Page_Down, plus, Tab)
//! - Letter keys registered in both cases so Shift combinations match however
//!   the keyboard layer reports them
//! - Unparseable bindings are dropped, never fatal

mod matcher;
pub mod parser;

pub use matcher::{KeyEvent, modifiers_from_state};
pub use parser::{KeySym, Modifiers, ParseError, Trigger, parse_trigger};

use std::collections::HashMap;
use z4term_config::KeyBinding;

/// Registry of keybindings mapping triggers to action names.
///
/// When two bindings produce the same trigger, the one registered later
/// wins; config order decides conflicts.
#[derive(Debug, Default)]
pub struct Keymap {
    bindings: HashMap<Trigger, String>,
    /// Config entries that did not yield a trigger, with the parse error
    dropped: Vec<(KeyBinding, ParseError)>,
}

impl Keymap {
    /// Create a new empty keymap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a keymap from config keybindings in registration order.
    pub fn from_config(keybindings: &[KeyBinding]) -> Self {
        let mut keymap = Self::new();

        log::info!(
            "Building keymap from {} config keybindings",
            keybindings.len()
        );
        for binding in keybindings {
            match parse_trigger(&binding.key) {
                Ok(trigger) => {
                    log::debug!(
                        "Registered keybinding: {} -> {} (parsed as: {})",
                        binding.key,
                        binding.action,
                        trigger
                    );
                    keymap.register(trigger, &binding.action);
                }
                Err(e) => {
                    log::debug!(
                        "Dropping keybinding '{}' for action '{}': {}",
                        binding.key,
                        binding.action,
                        e
                    );
                    keymap.dropped.push((binding.clone(), e));
                }
            }
        }

        log::info!("Keymap initialized with {} triggers", keymap.bindings.len());
        keymap
    }

    /// Register a trigger, plus its other letter case when the key has one.
    pub fn register(&mut self, trigger: Trigger, action: &str) {
        if trigger.key.has_case() {
            for key in [trigger.key.to_lower(), trigger.key.to_upper()] {
                self.insert(Trigger::new(key, trigger.modifiers), action);
            }
        } else {
            self.insert(trigger, action);
        }
    }

    fn insert(&mut self, trigger: Trigger, action: &str) {
        if let Some(previous) = self.bindings.insert(trigger, action.to_string())
            && previous != action
        {
            log::debug!("Trigger {} rebound: {} -> {}", trigger, previous, action);
        }
    }

    /// Look up the action bound to a key event.
    pub fn lookup(&self, event: &KeyEvent) -> Option<&str> {
        self.bindings.get(&event.trigger()).map(String::as_str)
    }

    /// Look up the action bound to an exact trigger.
    pub fn action_for(&self, trigger: &Trigger) -> Option<&str> {
        self.bindings.get(trigger).map(String::as_str)
    }

    /// All registered (trigger, action) pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Trigger, &str)> {
        self.bindings.iter().map(|(t, a)| (t, a.as_str()))
    }

    /// Config entries that were dropped because they did not parse
    pub fn dropped(&self) -> &[(KeyBinding, ParseError)] {
        &self.dropped
    }

    /// Check if the keymap has any triggers.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of registered triggers (case variants count separately).
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_keymap() {
        let keymap = Keymap::new();
        assert!(keymap.is_empty());
        assert_eq!(keymap.len(), 0);
    }

    #[test]
    fn test_letter_registers_both_cases() {
        let keymap = Keymap::from_config(&[KeyBinding::new("Ctrl+Shift+D", "split_vertical")]);
        assert_eq!(keymap.len(), 2);
    }

    #[test]
    fn test_non_letter_registers_once() {
        let keymap = Keymap::from_config(&[
            KeyBinding::new("Ctrl+plus", "zoom_in"),
            KeyBinding::new("Ctrl+Tab", "next_pane"),
        ]);
        assert_eq!(keymap.len(), 2);
    }

    #[test]
    fn test_invalid_keybinding_dropped() {
        let keymap = Keymap::from_config(&[
            KeyBinding::new("Ctrl+NoSuchKey", "some_action"),
            KeyBinding::new("Ctrl+A", "valid_action"),
        ]);
        assert_eq!(keymap.len(), 2);
        assert_eq!(keymap.dropped().len(), 1);
        assert_eq!(keymap.dropped()[0].0.action, "some_action");
    }

    #[test]
    fn test_defaults_all_parse() {
        let config = z4term_config::Config::default();
        let keymap = Keymap::from_config(&config.keybindings);
        assert!(keymap.dropped().is_empty());
    }
}

//! Keybinding management methods for `Config`.

use super::config_struct::Config;
use crate::types::KeyBinding;
use std::collections::HashMap;

impl Config {
    /// Merge the user's keybindings over the defaults.
    ///
    /// A user entry for a default action replaces that default in place, so
    /// the default ordering survives. Entries for any other action name are
    /// appended in the order the user wrote them. When the user lists the
    /// same action twice, the later entry wins.
    pub(crate) fn merge_default_keybindings(&mut self) {
        let user = std::mem::take(&mut self.keybindings);

        let mut overrides: HashMap<&str, &KeyBinding> = HashMap::new();
        for kb in &user {
            overrides.insert(kb.action.as_str(), kb);
        }

        let mut merged = Vec::with_capacity(user.len().max(crate::defaults::DEFAULT_ACTIONS.len()));
        for default_kb in crate::defaults::keybindings() {
            match overrides.remove(default_kb.action.as_str()) {
                Some(user_kb) => {
                    if user_kb.key != default_kb.key {
                        log::info!(
                            "Keybinding override: {} -> {} (default {})",
                            user_kb.action,
                            user_kb.key,
                            default_kb.key
                        );
                    }
                    merged.push(user_kb.clone());
                }
                None => merged.push(default_kb),
            }
        }

        // Remaining overrides name actions outside the default set
        for kb in &user {
            if let Some(extra) = overrides.remove(kb.action.as_str()) {
                log::info!("Keeping extra keybinding: {} -> {}", extra.key, extra.action);
                merged.push(extra.clone());
            }
        }

        self.keybindings = merged;
    }

    /// Binding string configured for an action, if any
    pub fn binding_for(&self, action: &str) -> Option<&str> {
        self.keybindings
            .iter()
            .rev()
            .find(|kb| kb.action == action)
            .map(|kb| kb.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_defaults_when_empty() {
        let mut config = Config {
            keybindings: Vec::new(),
            ..Config::default()
        };
        config.merge_default_keybindings();
        assert_eq!(config.keybindings, crate::defaults::keybindings());
    }

    #[test]
    fn test_merge_override_replaces_in_place() {
        let mut config = Config {
            keybindings: vec![KeyBinding::new("Ctrl+Alt+D", "split_vertical")],
            ..Config::default()
        };
        config.merge_default_keybindings();
        assert_eq!(config.keybindings.len(), 14);
        assert_eq!(config.keybindings[0].action, "split_vertical");
        assert_eq!(config.keybindings[0].key, "Ctrl+Alt+D");
        assert_eq!(config.binding_for("split_horizontal"), Some("Ctrl+Shift+E"));
    }

    #[test]
    fn test_merge_appends_unknown_actions_in_order() {
        let mut config = Config {
            keybindings: vec![
                KeyBinding::new("F5", "custom_b"),
                KeyBinding::new("F6", "custom_a"),
            ],
            ..Config::default()
        };
        config.merge_default_keybindings();
        assert_eq!(config.keybindings.len(), 16);
        assert_eq!(config.keybindings[14].action, "custom_b");
        assert_eq!(config.keybindings[15].action, "custom_a");
    }

    #[test]
    fn test_merge_duplicate_user_action_last_wins() {
        let mut config = Config {
            keybindings: vec![
                KeyBinding::new("F1", "copy"),
                KeyBinding::new("F2", "copy"),
            ],
            ..Config::default()
        };
        config.merge_default_keybindings();
        assert_eq!(config.keybindings.len(), 14);
        assert_eq!(config.binding_for("copy"), Some("F2"));
    }
}

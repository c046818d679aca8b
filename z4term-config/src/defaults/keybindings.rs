//! Default keybindings.

use crate::types::KeyBinding;

/// The fixed action names understood by the window, paired with their
/// default binding strings. Order is the keymap registration order.
pub const DEFAULT_ACTIONS: [(&str, &str); 14] = [
    ("split_vertical", "Ctrl+Shift+D"),
    ("split_horizontal", "Ctrl+Shift+E"),
    ("close_pane", "Ctrl+Shift+W"),
    ("new_tab", "Ctrl+Shift+T"),
    ("new_window", "Ctrl+Shift+N"),
    ("next_pane", "Ctrl+Tab"),
    ("search", "Ctrl+Shift+F"),
    ("zoom_in", "Ctrl+plus"),
    ("zoom_out", "Ctrl+minus"),
    ("zoom_reset", "Ctrl+0"),
    ("next_tab", "Ctrl+Shift+Page_Down"),
    ("prev_tab", "Ctrl+Shift+Page_Up"),
    ("copy", "Ctrl+Shift+C"),
    ("paste", "Ctrl+Shift+V"),
];

pub fn keybindings() -> Vec<KeyBinding> {
    DEFAULT_ACTIONS
        .iter()
        .map(|(action, key)| KeyBinding::new(*key, *action))
        .collect()
}

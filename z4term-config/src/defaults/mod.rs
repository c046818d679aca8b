//! Default value functions for configuration.
//!
//! Each function is used as a `#[serde(default = "crate::defaults::...")]`
//! attribute on a `Config` field and by `impl Default for Config`.

mod font;
mod keybindings;
mod terminal;

pub use font::{MIN_FONT_SIZE, font_family, font_size};
pub use keybindings::{DEFAULT_ACTIONS, keybindings};
pub use terminal::{
    FALLBACK_SHELL, MAX_SCROLLBACK, MIN_SCROLLBACK, notification_threshold, opacity, scrollback,
    theme,
};

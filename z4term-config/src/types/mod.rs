//! Plain data types shared by the config structs.

mod keybinding;

pub use keybinding::KeyBinding;

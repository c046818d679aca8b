// Library exports for testing and for hosts embedding the window logic
//
// z4term is single-threaded: every tree mutation, keymap lookup and action
// dispatch runs on the UI thread. The only lock is the `parking_lot::Mutex`
// around the debug log file.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod app;
pub mod cli;
pub use z4term_config as config;
pub use z4term_keybindings as keybindings;
pub mod pane;
pub mod session;
pub mod surface;
pub mod tab;

#[cfg(test)]
mod test_support;

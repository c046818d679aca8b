//! Terminal configuration management.
//!
//! # Sub-modules
//!
//! - [`config_struct`]: Core `Config` struct and its `Default` impl
//! - [`keybindings_methods`]: merging user keybindings over the defaults
//! - [`persistence`]: load/save and XDG path resolution
//! - [`validation`]: clamping and fallbacks applied after every load

pub mod config_struct;
pub mod keybindings_methods;
pub mod persistence;
pub mod validation;

pub use config_struct::Config;

pub use crate::types::KeyBinding;
